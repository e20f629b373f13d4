//! User directory and payment method handlers

use crate::error::{ServiceError, ServiceResult};
use crate::models::{PaymentUpdateResponse, UpdatePaymentRequest};
use crate::state::AppState;
use crate::store::Store;
use mealgate_authz::{rehydrate, Action, AuthzError, Identifier, ResourceKind, SessionClaims, User};
use tracing::info;

/// Admin-only user directory
pub async fn list_users<S: Store>(
    state: &AppState<S>,
    claims: Option<&SessionClaims>,
) -> ServiceResult<Vec<User>> {
    let actor = rehydrate(claims)?;
    let filter = state.resolver().resolve_list_filter(&actor, ResourceKind::Users)?;

    state.store().list_users(&filter).await
}

/// Replace a user's stored payment method
///
/// Gated by role only: users carry no country scope for payment edits. The
/// permission is checked before the user is looked up.
pub async fn update_user_payment<S: Store>(
    state: &AppState<S>,
    claims: Option<&SessionClaims>,
    user_id: &Identifier,
    request: UpdatePaymentRequest,
) -> ServiceResult<PaymentUpdateResponse> {
    let actor = rehydrate(claims)?;
    state
        .evaluator()
        .require(&actor, &Action::UpdatePaymentMethod)?;

    let method = request
        .payment_method
        .as_deref()
        .map(str::trim)
        .filter(|method| !method.is_empty())
        .ok_or_else(|| ServiceError::InvalidInput("Payment method is required".to_string()))?;

    let mut user = state
        .store()
        .get_user(user_id)
        .await?
        .ok_or_else(|| AuthzError::NotFound {
            resource: "user",
            id: user_id.to_string(),
        })?;

    user.payment_method = Some(method.to_string());
    state.store().save_user(user.clone()).await?;

    info!("Payment method for user {} updated by actor={}", user.id, actor.id);

    Ok(PaymentUpdateResponse {
        id: user.id,
        name: user.name,
        payment_method: method.to_string(),
    })
}
