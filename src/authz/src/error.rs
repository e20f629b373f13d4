//! Error types for the authorization engine

use thiserror::Error;

/// Authorization outcomes other than "allowed"
///
/// Every denial kind is its own variant so callers can pick the right response
/// (re-authenticate, never allowed, not found) without parsing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
    /// No verified actor is attached to the request
    #[error("Authentication required")]
    Unauthenticated,

    /// Programmer error: unknown action name or malformed action arguments
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The actor's role never permits this action
    #[error("Forbidden: action '{action}' is not permitted for this role")]
    ForbiddenAction { action: &'static str },

    /// The record belongs to a country outside the actor's scope
    #[error("Forbidden: location access denied")]
    ForbiddenLocation,

    /// The actor neither owns the record nor holds an elevated role over it
    #[error("Forbidden: cannot modify this {resource}")]
    ForbiddenOwnership { resource: &'static str },

    /// The record does not exist (or is concealed from this actor)
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// A value outside one of the closed enumerations
    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },
}

impl AuthzError {
    /// Stable machine-readable code for this outcome
    pub fn code(&self) -> &'static str {
        match self {
            AuthzError::Unauthenticated => "unauthenticated",
            AuthzError::Configuration(_) => "configuration_error",
            AuthzError::ForbiddenAction { .. } => "forbidden_action",
            AuthzError::ForbiddenLocation => "forbidden_location",
            AuthzError::ForbiddenOwnership { .. } => "forbidden_ownership",
            AuthzError::NotFound { .. } => "not_found",
            AuthzError::InvalidValue { .. } => "invalid_value",
        }
    }

    /// HTTP-equivalent status code
    pub fn status(&self) -> u16 {
        match self {
            AuthzError::Unauthenticated => 401,
            AuthzError::ForbiddenAction { .. }
            | AuthzError::ForbiddenLocation
            | AuthzError::ForbiddenOwnership { .. } => 403,
            AuthzError::NotFound { .. } => 404,
            AuthzError::InvalidValue { .. } => 400,
            AuthzError::Configuration(_) => 500,
        }
    }

    /// True for the three authorization denial kinds
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            AuthzError::ForbiddenAction { .. }
                | AuthzError::ForbiddenLocation
                | AuthzError::ForbiddenOwnership { .. }
        )
    }

    /// Rewrites location and ownership denials on a single record as `NotFound`,
    /// so an out-of-scope actor cannot probe for the record's existence.
    pub fn conceal(self, resource: &'static str, id: impl Into<String>) -> Self {
        match self {
            AuthzError::ForbiddenLocation | AuthzError::ForbiddenOwnership { .. } => {
                AuthzError::NotFound {
                    resource,
                    id: id.into(),
                }
            }
            other => other,
        }
    }
}

/// Result type for authorization operations
pub type Result<T> = std::result::Result<T, AuthzError>;
