//! Request handlers
//!
//! Each handler rehydrates the actor from the session claims and consults the
//! resolver before writing anything to the store.

pub mod orders;
pub mod restaurants;
pub mod users;
