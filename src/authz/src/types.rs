//! Core authorization types

use crate::error::AuthzError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque record or user identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Identifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Coarse capability tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Manager,
    Member,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Member];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Member => "MEMBER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| AuthzError::InvalidValue {
                field: "role",
                value: s.to_string(),
            })
    }
}

/// Location dimension, orthogonal to role
///
/// Closed set: new countries are added as variants, never accepted as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    India,
    America,
}

impl Country {
    pub const ALL: [Country; 2] = [Country::India, Country::America];

    pub fn as_str(self) -> &'static str {
        match self {
            Country::India => "INDIA",
            Country::America => "AMERICA",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|country| country.as_str() == s)
            .ok_or_else(|| AuthzError::InvalidValue {
                field: "country",
                value: s.to_string(),
            })
    }
}

/// The authenticated identity making a request
///
/// Rebuilt from session claims on every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: Identifier,
    pub role: Role,
    pub country: Country,
}

impl Actor {
    pub fn new(id: impl Into<Identifier>, role: Role, country: Country) -> Self {
        Self {
            id: id.into(),
            role,
            country,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether the actor is located in `country`
    pub fn is_in(&self, country: Country) -> bool {
        self.country == country
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing_is_exact() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("MEMBER".parse::<Role>().unwrap(), Role::Member);
        assert!("admin".parse::<Role>().is_err());
        assert!("OWNER".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_country_rejects_free_text() {
        assert_eq!("INDIA".parse::<Country>().unwrap(), Country::India);
        assert_eq!("AMERICA".parse::<Country>().unwrap(), Country::America);

        match "CANADA".parse::<Country>() {
            Err(AuthzError::InvalidValue { field, value }) => {
                assert_eq!(field, "country");
                assert_eq!(value, "CANADA");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_enum_serde_uses_wire_names() {
        let json = serde_json::to_string(&Country::America).unwrap();
        assert_eq!(json, "\"AMERICA\"");

        let role: Role = serde_json::from_str("\"MANAGER\"").unwrap();
        assert_eq!(role, Role::Manager);

        assert!(serde_json::from_str::<Role>("\"SUPERUSER\"").is_err());
    }

    #[test]
    fn test_actor_creation() {
        let actor = Actor::new("user-1", Role::Admin, Country::India);
        assert_eq!(actor.id.as_str(), "user-1");
        assert!(actor.is_admin());
        assert!(actor.is_in(Country::India));
        assert!(!actor.is_in(Country::America));
    }

    #[test]
    fn test_generated_identifiers_are_unique() {
        let a = Identifier::generate();
        let b = Identifier::generate();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }
}
