//! Storage collaborator: trait plus an in-memory implementation

use crate::error::{ServiceError, ServiceResult};
use async_trait::async_trait;
use mealgate_authz::{Identifier, ListFilter, MenuItem, Order, Restaurant, User};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Record storage used by the handlers
///
/// Implementations must apply every [`ListFilter`] exactly as given.
#[async_trait]
pub trait Store: Send + Sync {
    /// Orders admitted by `filter`, oldest first
    async fn list_orders(&self, filter: &ListFilter) -> ServiceResult<Vec<Order>>;

    async fn get_order(&self, id: &Identifier) -> ServiceResult<Option<Order>>;

    /// Store a new order
    async fn insert_order(&self, order: Order) -> ServiceResult<()>;

    /// Apply `change` to the current version of an order as one atomic step
    ///
    /// `change` receives the stored record (`None` if absent) and returns the
    /// replacement; nothing is written when it fails. No other write to the
    /// order can land between the read and the write.
    async fn modify_order<F>(&self, id: &Identifier, change: F) -> ServiceResult<Order>
    where
        F: FnOnce(Option<&Order>) -> ServiceResult<Order> + Send;

    /// Restaurants admitted by `filter`, with menus, sorted by name
    async fn list_restaurants(&self, filter: &ListFilter) -> ServiceResult<Vec<Restaurant>>;

    async fn get_restaurant(&self, id: &Identifier) -> ServiceResult<Option<Restaurant>>;

    async fn get_menu_item(&self, id: &Identifier) -> ServiceResult<Option<MenuItem>>;

    /// Users admitted by `filter`, sorted by name
    async fn list_users(&self, filter: &ListFilter) -> ServiceResult<Vec<User>>;

    async fn get_user(&self, id: &Identifier) -> ServiceResult<Option<User>>;

    /// Replace an existing user
    async fn save_user(&self, user: User) -> ServiceResult<()>;
}

/// In-memory store
pub struct InMemoryStore {
    orders: Arc<RwLock<HashMap<Identifier, Order>>>,
    restaurants: Arc<RwLock<HashMap<Identifier, Restaurant>>>,
    users: Arc<RwLock<HashMap<Identifier, User>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
            restaurants: Arc::new(RwLock::new(HashMap::new())),
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add or replace a restaurant and its menu
    pub async fn put_restaurant(&self, restaurant: Restaurant) {
        let mut restaurants = self.restaurants.write().await;
        restaurants.insert(restaurant.id.clone(), restaurant);
    }

    /// Add or replace a user
    pub async fn put_user(&self, user: User) {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user);
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn list_orders(&self, filter: &ListFilter) -> ServiceResult<Vec<Order>> {
        let orders = self.orders.read().await;
        let mut matching: Vec<Order> = orders
            .values()
            .filter(|order| filter.admits(*order))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(matching)
    }

    async fn get_order(&self, id: &Identifier) -> ServiceResult<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(id).cloned())
    }

    async fn insert_order(&self, order: Order) -> ServiceResult<()> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id) {
            return Err(ServiceError::Storage(format!(
                "order '{}' already exists",
                order.id
            )));
        }
        orders.insert(order.id.clone(), order);
        Ok(())
    }

    async fn modify_order<F>(&self, id: &Identifier, change: F) -> ServiceResult<Order>
    where
        F: FnOnce(Option<&Order>) -> ServiceResult<Order> + Send,
    {
        let mut orders = self.orders.write().await;
        let updated = change(orders.get(id))?;

        if updated.id != *id {
            return Err(ServiceError::Storage(format!(
                "order '{}' cannot be replaced by '{}'",
                id, updated.id
            )));
        }
        if !orders.contains_key(id) {
            return Err(ServiceError::Storage(format!("order '{}' does not exist", id)));
        }

        orders.insert(id.clone(), updated.clone());
        Ok(updated)
    }

    async fn list_restaurants(&self, filter: &ListFilter) -> ServiceResult<Vec<Restaurant>> {
        let restaurants = self.restaurants.read().await;
        let mut matching: Vec<Restaurant> = restaurants
            .values()
            .filter(|restaurant| filter.admits(*restaurant))
            .cloned()
            .collect();

        matching.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matching)
    }

    async fn get_restaurant(&self, id: &Identifier) -> ServiceResult<Option<Restaurant>> {
        let restaurants = self.restaurants.read().await;
        Ok(restaurants.get(id).cloned())
    }

    async fn get_menu_item(&self, id: &Identifier) -> ServiceResult<Option<MenuItem>> {
        let restaurants = self.restaurants.read().await;
        Ok(restaurants
            .values()
            .flat_map(|restaurant| restaurant.menu.iter())
            .find(|item| &item.id == id)
            .cloned())
    }

    async fn list_users(&self, filter: &ListFilter) -> ServiceResult<Vec<User>> {
        let users = self.users.read().await;
        let mut matching: Vec<User> = users
            .values()
            .filter(|user| filter.admits(*user))
            .cloned()
            .collect();

        matching.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matching)
    }

    async fn get_user(&self, id: &Identifier) -> ServiceResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn save_user(&self, user: User) -> ServiceResult<()> {
        let mut users = self.users.write().await;
        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user;
                Ok(())
            }
            None => Err(ServiceError::Storage(format!(
                "user '{}' does not exist",
                user.id
            ))),
        }
    }
}
