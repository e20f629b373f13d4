//! Request and response models

use mealgate_authz::{Action, Identifier, OrderStatus};
use serde::{Deserialize, Serialize};

/// One requested line of a new order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub menu_item_id: Identifier,
    pub quantity: u32,
}

/// New order: menu items and quantities only; prices come from the menu
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderLineRequest>,
}

/// Partial update of an existing order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl UpdateOrderRequest {
    /// Action that has to be permitted for this update
    ///
    /// Moving an order past PENDING is placing it, cancelling needs the cancel
    /// permission, and anything else is editing a draft.
    pub fn required_action(&self) -> Action {
        match self.status {
            Some(OrderStatus::Confirmed | OrderStatus::Preparing | OrderStatus::Delivered) => {
                Action::PlaceOrder
            }
            Some(OrderStatus::Cancelled) => Action::CancelOrder,
            Some(OrderStatus::Pending) | None => Action::CreateOrder,
        }
    }

    /// Payment method with surrounding whitespace removed, if non-blank
    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method
            .as_deref()
            .map(str::trim)
            .filter(|method| !method.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.payment_method().is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    #[serde(default)]
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdateResponse {
    pub id: Identifier,
    pub name: String,
    pub payment_method: String,
}
