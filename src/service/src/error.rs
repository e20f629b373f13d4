//! Service error handling

use mealgate_authz::{AuthzError, OrderStatus};
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Authorization outcome (unauthenticated, forbidden, not found, ...)
    #[error(transparent)]
    Authz(#[from] AuthzError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    /// Stable machine-readable code, suitable for clients to branch on
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Authz(err) => err.code(),
            ServiceError::InvalidInput(_) => "invalid_input",
            ServiceError::InvalidTransition { .. } => "invalid_transition",
            ServiceError::Storage(_) => "storage_error",
        }
    }

    /// HTTP-equivalent status code
    pub fn status(&self) -> u16 {
        match self {
            ServiceError::Authz(err) => err.status(),
            ServiceError::InvalidInput(_) => 400,
            ServiceError::InvalidTransition { .. } => 409,
            ServiceError::Storage(_) => 500,
        }
    }

    /// The wrapped authorization outcome, if any
    pub fn as_authz(&self) -> Option<&AuthzError> {
        match self {
            ServiceError::Authz(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authz_codes_pass_through() {
        let err = ServiceError::from(AuthzError::ForbiddenLocation);
        assert_eq!(err.code(), "forbidden_location");
        assert_eq!(err.status(), 403);
        assert_eq!(err.as_authz(), Some(&AuthzError::ForbiddenLocation));
    }

    #[test]
    fn test_service_codes() {
        let err = ServiceError::InvalidTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Pending,
        };
        assert_eq!(err.code(), "invalid_transition");
        assert_eq!(err.status(), 409);
        assert_eq!(err.to_string(), "Invalid status transition: DELIVERED -> PENDING");

        assert_eq!(ServiceError::InvalidInput("x".into()).status(), 400);
        assert!(ServiceError::InvalidInput("x".into()).as_authz().is_none());
    }
}
