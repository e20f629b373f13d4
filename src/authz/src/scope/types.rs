//! Resource kinds, listing filters and the record view they operate on

use crate::model::{Order, Restaurant, User};
use crate::types::{Country, Identifier};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource collections the resolver knows how to scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Orders,
    Restaurants,
    Users,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Orders,
        ResourceKind::Restaurants,
        ResourceKind::Users,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Orders => "orders",
            ResourceKind::Restaurants => "restaurants",
            ResourceKind::Users => "users",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate bounding which records of a collection an actor may retrieve
///
/// Storage backends must apply it exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ListFilter {
    /// No restriction
    All,
    /// Records stamped with this country
    Country(Country),
    /// Records owned by this user
    Owner(Identifier),
}

impl ListFilter {
    /// Whether `record` passes this filter
    pub fn admits<R: Scoped>(&self, record: &R) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Country(country) => record.country() == *country,
            ListFilter::Owner(owner) => record.owner_id() == Some(owner),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, ListFilter::All)
    }
}

impl fmt::Display for ListFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListFilter::All => write!(f, "all"),
            ListFilter::Country(country) => write!(f, "country = {}", country),
            ListFilter::Owner(owner) => write!(f, "owner = {}", owner),
        }
    }
}

/// Scoping attributes of a stored record
pub trait Scoped {
    /// Singular resource name used in errors ("order", "restaurant", ...)
    const RESOURCE: &'static str;

    fn id(&self) -> &Identifier;

    /// Country stamp assigned at creation
    fn country(&self) -> Country;

    /// Owning user, if the record has one
    fn owner_id(&self) -> Option<&Identifier>;
}

impl Scoped for Order {
    const RESOURCE: &'static str = "order";

    fn id(&self) -> &Identifier {
        &self.id
    }

    fn country(&self) -> Country {
        self.country
    }

    fn owner_id(&self) -> Option<&Identifier> {
        Some(&self.user_id)
    }
}

impl Scoped for Restaurant {
    const RESOURCE: &'static str = "restaurant";

    fn id(&self) -> &Identifier {
        &self.id
    }

    fn country(&self) -> Country {
        self.country
    }

    fn owner_id(&self) -> Option<&Identifier> {
        None
    }
}

impl Scoped for User {
    const RESOURCE: &'static str = "user";

    fn id(&self) -> &Identifier {
        &self.id
    }

    fn country(&self) -> Country {
        self.country
    }

    fn owner_id(&self) -> Option<&Identifier> {
        Some(&self.id)
    }
}
