//! Restaurant handlers

use crate::error::ServiceResult;
use crate::state::AppState;
use crate::store::Store;
use mealgate_authz::{rehydrate, ResourceKind, Restaurant, SessionClaims};
use tracing::debug;

/// List restaurants (with menus) in the caller's scope
pub async fn list_restaurants<S: Store>(
    state: &AppState<S>,
    claims: Option<&SessionClaims>,
) -> ServiceResult<Vec<Restaurant>> {
    let actor = rehydrate(claims)?;
    let filter = state.resolver().resolve_list_filter(&actor, ResourceKind::Restaurants)?;

    let restaurants = state.store().list_restaurants(&filter).await?;
    debug!(
        "Listed {} restaurants for actor={} ({})",
        restaurants.len(),
        actor.id,
        filter
    );

    Ok(restaurants)
}
