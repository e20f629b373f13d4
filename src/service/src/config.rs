//! Service configuration

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How single-record location and ownership denials are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disclosure {
    /// Report them as "not found" so out-of-scope actors cannot probe for records
    #[default]
    Conceal,
    /// Report the precise denial reason
    Reveal,
}

impl FromStr for Disclosure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conceal" => Ok(Disclosure::Conceal),
            "reveal" => Ok(Disclosure::Reveal),
            other => Err(format!("unknown disclosure mode '{}'", other)),
        }
    }
}

impl fmt::Display for Disclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disclosure::Conceal => f.write_str("conceal"),
            Disclosure::Reveal => f.write_str("reveal"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Reporting of location/ownership denials on single records
    pub disclosure: Disclosure,

    /// Reject status changes outside the forward order lifecycle
    pub enforce_status_transitions: bool,

    /// Maximum number of lines in a new order
    pub max_order_items: usize,

    /// Maximum quantity on a single order line
    pub max_item_quantity: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            disclosure: Disclosure::Conceal,
            enforce_status_transitions: false,
            max_order_items: 50,
            max_item_quantity: 99,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the process environment
    ///
    /// - `MEALGATE_DISCLOSURE` - `conceal` or `reveal` (default: conceal)
    /// - `MEALGATE_ENFORCE_TRANSITIONS` - `true` or `false` (default: false)
    /// - `MEALGATE_MAX_ORDER_ITEMS` - positive integer (default: 50)
    /// - `MEALGATE_MAX_ITEM_QUANTITY` - positive integer (default: 99)
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let disclosure = lookup("MEALGATE_DISCLOSURE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.disclosure);

        let enforce_status_transitions = lookup("MEALGATE_ENFORCE_TRANSITIONS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.enforce_status_transitions);

        let max_order_items = lookup("MEALGATE_MAX_ORDER_ITEMS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(defaults.max_order_items);

        let max_item_quantity = lookup("MEALGATE_MAX_ITEM_QUANTITY")
            .and_then(|s| s.trim().parse().ok())
            .filter(|n: &u32| *n > 0)
            .unwrap_or(defaults.max_item_quantity);

        Self {
            disclosure,
            enforce_status_transitions,
            max_order_items,
            max_item_quantity,
        }
    }
}
