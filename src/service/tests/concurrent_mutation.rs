//! Overlapping mutations on one order
//!
//! The wrapped store holds every order mutation at a barrier until two have
//! arrived, so both requests race for the same stored version.

mod common;

use async_trait::async_trait;
use common::*;
use mealgate_authz::{Identifier, ListFilter, MenuItem, Order, OrderStatus, Restaurant, User};
use mealgate_service::handlers::orders::{cancel_order, create_order, update_order};
use mealgate_service::models::UpdateOrderRequest;
use mealgate_service::{AppState, InMemoryStore, ServiceConfig, ServiceResult, Store};
use std::sync::Arc;
use tokio::sync::Barrier;

struct RacingStore {
    inner: Arc<InMemoryStore>,
    barrier: Barrier,
}

impl RacingStore {
    fn new(inner: Arc<InMemoryStore>) -> Self {
        Self {
            inner,
            barrier: Barrier::new(2),
        }
    }
}

#[async_trait]
impl Store for RacingStore {
    async fn list_orders(&self, filter: &ListFilter) -> ServiceResult<Vec<Order>> {
        self.inner.list_orders(filter).await
    }

    async fn get_order(&self, id: &Identifier) -> ServiceResult<Option<Order>> {
        self.inner.get_order(id).await
    }

    async fn insert_order(&self, order: Order) -> ServiceResult<()> {
        self.inner.insert_order(order).await
    }

    async fn modify_order<F>(&self, id: &Identifier, change: F) -> ServiceResult<Order>
    where
        F: FnOnce(Option<&Order>) -> ServiceResult<Order> + Send,
    {
        self.barrier.wait().await;
        self.inner.modify_order(id, change).await
    }

    async fn list_restaurants(&self, filter: &ListFilter) -> ServiceResult<Vec<Restaurant>> {
        self.inner.list_restaurants(filter).await
    }

    async fn get_restaurant(&self, id: &Identifier) -> ServiceResult<Option<Restaurant>> {
        self.inner.get_restaurant(id).await
    }

    async fn get_menu_item(&self, id: &Identifier) -> ServiceResult<Option<MenuItem>> {
        self.inner.get_menu_item(id).await
    }

    async fn list_users(&self, filter: &ListFilter) -> ServiceResult<Vec<User>> {
        self.inner.list_users(filter).await
    }

    async fn get_user(&self, id: &Identifier) -> ServiceResult<Option<User>> {
        self.inner.get_user(id).await
    }

    async fn save_user(&self, user: User) -> ServiceResult<()> {
        self.inner.save_user(user).await
    }
}

/// Direct state for setup plus a racing state over the same records
async fn racing_pair(
    config: ServiceConfig,
) -> (AppState<InMemoryStore>, AppState<RacingStore>) {
    let inner = seeded_store().await;
    let direct = AppState::new(Arc::clone(&inner), config.clone());
    let racing = AppState::new(Arc::new(RacingStore::new(inner)), config);
    (direct, racing)
}

fn set_status(status: OrderStatus) -> UpdateOrderRequest {
    UpdateOrderRequest {
        status: Some(status),
        payment_method: None,
    }
}

#[tokio::test]
async fn test_cancel_survives_overlapping_payment_update() {
    let (direct, racing) = racing_pair(ServiceConfig::default()).await;
    let order = create_order(&direct, Some(&claims(MEMBER_INDIA)), order_of(&[(PANEER, 1)]))
        .await
        .unwrap();

    let member = claims(MEMBER_INDIA);
    let admin = claims(ADMIN);
    let pay = UpdateOrderRequest {
        status: None,
        payment_method: Some("UPI".to_string()),
    };

    let (paid, cancelled) = tokio::join!(
        update_order(&racing, Some(&member), &order.id, pay),
        cancel_order(&racing, Some(&admin), &order.id),
    );
    paid.unwrap();
    assert_eq!(cancelled.unwrap().status, OrderStatus::Cancelled);

    let stored = direct.store().get_order(&order.id).await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Cancelled);
    assert_eq!(stored.payment_method.as_deref(), Some("UPI"));
}

#[tokio::test]
async fn test_terminal_status_holds_under_overlap() {
    let config = ServiceConfig {
        enforce_status_transitions: true,
        ..ServiceConfig::default()
    };
    let (direct, racing) = racing_pair(config).await;
    let admin = claims(ADMIN);

    let order = create_order(&direct, Some(&claims(MEMBER_INDIA)), order_of(&[(NAAN, 2)]))
        .await
        .unwrap();
    for next in [OrderStatus::Confirmed, OrderStatus::Preparing] {
        update_order(&direct, Some(&admin), &order.id, set_status(next))
            .await
            .unwrap();
    }

    let (delivered, cancelled) = tokio::join!(
        update_order(&racing, Some(&admin), &order.id, set_status(OrderStatus::Delivered)),
        cancel_order(&racing, Some(&admin), &order.id),
    );

    // Both statuses are terminal, so exactly one of the two lands
    let stored = direct.store().get_order(&order.id).await.unwrap().unwrap();
    match (delivered, cancelled) {
        (Ok(order), Err(err)) => {
            assert_eq!(order.status, OrderStatus::Delivered);
            assert_eq!(err.code(), "invalid_transition");
            assert_eq!(stored.status, OrderStatus::Delivered);
        }
        (Err(err), Ok(order)) => {
            assert_eq!(order.status, OrderStatus::Cancelled);
            assert_eq!(err.code(), "invalid_transition");
            assert_eq!(stored.status, OrderStatus::Cancelled);
        }
        (delivered, cancelled) => panic!(
            "expected exactly one mutation to land: delivered={:?} cancelled={:?}",
            delivered, cancelled
        ),
    }
}
