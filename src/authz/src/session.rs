//! Rehydrating an [`Actor`] from verified session claims

use crate::error::{AuthzError, Result};
use crate::types::{Actor, Country, Identifier, Role};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Claims carried by a verified session token
///
/// Signature verification happens upstream; role and country arrive as raw
/// strings and are validated here before anything reaches the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user id)
    pub sub: String,
    pub role: String,
    pub country: String,
}

impl SessionClaims {
    pub fn new(sub: impl Into<String>, role: Role, country: Country) -> Self {
        Self {
            sub: sub.into(),
            role: role.as_str().to_string(),
            country: country.as_str().to_string(),
        }
    }
}

impl TryFrom<&SessionClaims> for Actor {
    type Error = AuthzError;

    fn try_from(claims: &SessionClaims) -> Result<Self> {
        if claims.sub.trim().is_empty() {
            return Err(AuthzError::InvalidValue {
                field: "sub",
                value: claims.sub.clone(),
            });
        }

        Ok(Actor {
            id: Identifier::new(claims.sub.clone()),
            role: claims.role.parse()?,
            country: claims.country.parse()?,
        })
    }
}

/// Actor for this request, or `Unauthenticated`
///
/// Missing claims and claims carrying values outside the closed enumerations
/// are both treated as "no identity": the caller's remedy is to sign in again.
pub fn rehydrate(claims: Option<&SessionClaims>) -> Result<Actor> {
    let claims = claims.ok_or(AuthzError::Unauthenticated)?;

    Actor::try_from(claims).map_err(|err| {
        warn!("Rejecting session claims for sub={}: {}", claims.sub, err);
        AuthzError::Unauthenticated
    })
}
