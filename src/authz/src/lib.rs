//! # Mealgate Authorization Engine
//!
//! Role- and country-scoped authorization for a food-ordering service.
//!
//! ## Features
//!
//! - **Permission evaluator**: one policy table mapping each action to a rule
//! - **Scope resolver**: listing filters for orders, restaurants and users
//! - **Mutation gate**: action, existence, location and ownership checks with
//!   a distinct denial reason for each
//! - **Session rehydration**: closed-enumeration validation of session claims
//!
//! Everything here is stateless and pure; decisions are never cached.
//!
//! ## Example
//!
//! ```rust
//! use mealgate_authz::{rehydrate, Action, AuthzError, ResourceKind, ScopeResolver, SessionClaims};
//! use mealgate_authz::{Country, ListFilter, Role};
//!
//! let claims = SessionClaims::new("user-42", Role::Manager, Country::America);
//! let actor = rehydrate(Some(&claims))?;
//!
//! let resolver = ScopeResolver::new();
//! assert!(resolver.evaluator().can_perform(&actor, &Action::CancelOrder));
//! assert!(!resolver
//!     .evaluator()
//!     .can_perform(&actor, &Action::AccessCountryData(Country::India)));
//!
//! let filter = resolver.resolve_list_filter(&actor, ResourceKind::Orders)?;
//! assert_eq!(filter, ListFilter::Country(Country::America));
//! # Ok::<(), AuthzError>(())
//! ```

pub mod error;
pub mod model;
pub mod permission;
pub mod scope;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{AuthzError, Result};
pub use model::{MenuItem, Order, OrderItem, OrderStatus, Restaurant, User};
pub use permission::{Action, PermissionEvaluator, Rule};
pub use scope::{ListFilter, ResourceKind, ScopeResolver, Scoped};
pub use session::{rehydrate, SessionClaims};
pub use types::{Actor, Country, Identifier, Role};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
