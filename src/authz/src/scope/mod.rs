//! Scope module for role- and country-based data scoping.
//!
//! This module provides:
//! - Listing filters per resource collection (orders, restaurants, users)
//! - The per-record mutation gate (action, existence, location, ownership)
//! - The [`Scoped`] view storage records expose to both

mod resolver;
mod types;

pub use resolver::ScopeResolver;
pub use types::{ListFilter, ResourceKind, Scoped};
