//! Order handlers

use crate::error::{ServiceError, ServiceResult};
use crate::models::{CreateOrderRequest, UpdateOrderRequest};
use crate::state::AppState;
use crate::store::Store;
use mealgate_authz::{
    rehydrate, Action, Actor, AuthzError, Identifier, MenuItem, Order, OrderItem, OrderStatus,
    ResourceKind, Scoped, SessionClaims,
};
use tracing::{debug, info};

/// List the orders visible to the caller
///
/// ADMIN sees every order, MANAGER the orders of their country, MEMBER only
/// their own.
pub async fn list_orders<S: Store>(
    state: &AppState<S>,
    claims: Option<&SessionClaims>,
) -> ServiceResult<Vec<Order>> {
    let actor = rehydrate(claims)?;
    let filter = state.resolver().resolve_list_filter(&actor, ResourceKind::Orders)?;

    let orders = state.store().list_orders(&filter).await?;
    debug!("Listed {} orders for actor={} ({})", orders.len(), actor.id, filter);

    Ok(orders)
}

/// Create a PENDING order owned by the caller and stamped with their country
///
/// Prices are taken from the menu. Every menu item must belong to a
/// restaurant the caller may access.
pub async fn create_order<S: Store>(
    state: &AppState<S>,
    claims: Option<&SessionClaims>,
    request: CreateOrderRequest,
) -> ServiceResult<Order> {
    let actor = rehydrate(claims)?;
    state.evaluator().require(&actor, &Action::CreateOrder)?;

    if request.items.is_empty() {
        return Err(ServiceError::InvalidInput(
            "Order must contain at least one item".to_string(),
        ));
    }
    if request.items.len() > state.config().max_order_items {
        return Err(ServiceError::InvalidInput(format!(
            "Order exceeds {} items",
            state.config().max_order_items
        )));
    }

    let mut items = Vec::with_capacity(request.items.len());
    for line in &request.items {
        if line.quantity == 0 || line.quantity > state.config().max_item_quantity {
            return Err(ServiceError::InvalidInput(format!(
                "Quantity for menu item '{}' must be between 1 and {}",
                line.menu_item_id,
                state.config().max_item_quantity
            )));
        }

        let menu_item = orderable_item(state, &actor, &line.menu_item_id).await?;
        items.push(OrderItem {
            menu_item_id: menu_item.id,
            quantity: line.quantity,
            price: menu_item.price,
        });
    }

    let order = Order::draft(&actor, items);
    state.store().insert_order(order.clone()).await?;

    info!(
        "Order {} created by actor={} country={} total={}",
        order.id, actor.id, order.country, order.total_amount
    );

    Ok(order)
}

/// Change the status and/or payment method of an order
///
/// Moving past PENDING requires `placeOrder`, cancelling requires
/// `cancelOrder`; then the stored order passes the mutation gate. The gate
/// and the write happen as one store operation.
pub async fn update_order<S: Store>(
    state: &AppState<S>,
    claims: Option<&SessionClaims>,
    id: &Identifier,
    request: UpdateOrderRequest,
) -> ServiceResult<Order> {
    let actor = rehydrate(claims)?;

    if request.is_empty() {
        return Err(ServiceError::InvalidInput(
            "Nothing to update: provide status or paymentMethod".to_string(),
        ));
    }

    let action = request.required_action();
    let updated = state
        .store()
        .modify_order(id, |existing| {
            let mut updated = gate(state, &actor, &action, id, existing)?.clone();
            if let Some(status) = request.status {
                state.check_transition(updated.status, status)?;
                updated.status = status;
            }
            if let Some(method) = request.payment_method() {
                updated.payment_method = Some(method.to_string());
            }
            Ok(updated)
        })
        .await?;

    info!(
        "Order {} updated by actor={}: status={} has_payment_method={}",
        id,
        actor.id,
        updated.status,
        updated.payment_method.is_some()
    );

    Ok(updated)
}

/// Cancel an order
pub async fn cancel_order<S: Store>(
    state: &AppState<S>,
    claims: Option<&SessionClaims>,
    id: &Identifier,
) -> ServiceResult<Order> {
    let actor = rehydrate(claims)?;

    let cancelled = state
        .store()
        .modify_order(id, |existing| {
            let mut cancelled = gate(state, &actor, &Action::CancelOrder, id, existing)?.clone();
            state.check_transition(cancelled.status, OrderStatus::Cancelled)?;
            cancelled.status = OrderStatus::Cancelled;
            Ok(cancelled)
        })
        .await?;

    info!("Order {} cancelled by actor={}", id, actor.id);

    Ok(cancelled)
}

/// Mutation gate on a stored order, with the disclosure policy applied
fn gate<'r, S: Store>(
    state: &AppState<S>,
    actor: &Actor,
    action: &Action,
    id: &Identifier,
    existing: Option<&'r Order>,
) -> ServiceResult<&'r Order> {
    state
        .resolver()
        .authorize_mutation(actor, action, id, existing)
        .map_err(|err| state.disclose(err, Order::RESOURCE, id.as_str()))
}

/// Fetch a menu item and check its restaurant against the location gate
async fn orderable_item<S: Store>(
    state: &AppState<S>,
    actor: &Actor,
    id: &Identifier,
) -> ServiceResult<MenuItem> {
    let not_found = || AuthzError::NotFound {
        resource: "menu item",
        id: id.to_string(),
    };

    let menu_item = state.store().get_menu_item(id).await?.ok_or_else(not_found)?;
    let restaurant = state
        .store()
        .get_restaurant(&menu_item.restaurant_id)
        .await?
        .ok_or_else(|| {
            ServiceError::Storage(format!(
                "menu item '{}' references missing restaurant '{}'",
                id, menu_item.restaurant_id
            ))
        })?;

    state
        .evaluator()
        .require(actor, &Action::AccessCountryData(restaurant.country))
        .map_err(|err| state.disclose(err, "menu item", id.as_str()))?;

    Ok(menu_item)
}
