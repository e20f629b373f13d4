//! # Mealgate Service
//!
//! Order, restaurant and user operations for the food-ordering service, each
//! gated by the [`mealgate_authz`] evaluator and scope resolver.
//!
//! ## Features
//!
//! - **Scoped listings**: orders, restaurants and the admin user directory
//! - **Gated mutations**: create, update and cancel orders; edit payment methods
//! - **Injected storage**: any [`Store`] implementation, with [`InMemoryStore`] included
//! - **Non-disclosing errors**: out-of-scope records look like missing ones by default
//!
//! ## Example
//!
//! ```rust
//! use mealgate_authz::{Country, Role, SessionClaims};
//! use mealgate_service::{handlers, AppState, InMemoryStore, ServiceConfig};
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let state = AppState::new(Arc::new(InMemoryStore::new()), ServiceConfig::default());
//! let claims = SessionClaims::new("user-1", Role::Member, Country::India);
//!
//! let orders = handlers::orders::list_orders(&state, Some(&claims)).await.unwrap();
//! assert!(orders.is_empty());
//!
//! let err = handlers::users::list_users(&state, Some(&claims)).await.unwrap_err();
//! assert_eq!(err.code(), "forbidden_action");
//! # });
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;

pub use config::{Disclosure, ServiceConfig};
pub use error::{ServiceError, ServiceResult};
pub use state::AppState;
pub use store::{InMemoryStore, Store};
