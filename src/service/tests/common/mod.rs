//! Seed data shared by the service integration tests

#![allow(dead_code)]

use mealgate_authz::{Country, Identifier, MenuItem, Restaurant, Role, SessionClaims, User};
use mealgate_service::models::{CreateOrderRequest, OrderLineRequest};
use mealgate_service::{AppState, Disclosure, InMemoryStore, ServiceConfig};
use rust_decimal::Decimal;
use std::sync::Arc;

pub const ADMIN: &str = "nick-fury";
pub const MANAGER_INDIA: &str = "captain-marvel";
pub const MANAGER_AMERICA: &str = "captain-america";
pub const MEMBER_INDIA: &str = "thanos";
pub const MEMBER_INDIA_2: &str = "thor";
pub const MEMBER_AMERICA: &str = "travis";

pub const PANEER: &str = "spice-garden-paneer";
pub const NAAN: &str = "spice-garden-naan";
pub const BURGER: &str = "burger-palace-classic";

pub fn claims(id: &str) -> SessionClaims {
    let (role, country) = match id {
        ADMIN => (Role::Admin, Country::India),
        MANAGER_INDIA => (Role::Manager, Country::India),
        MANAGER_AMERICA => (Role::Manager, Country::America),
        MEMBER_AMERICA => (Role::Member, Country::America),
        _ => (Role::Member, Country::India),
    };
    SessionClaims::new(id, role, country)
}

fn menu_item(id: &str, restaurant: &str, name: &str, price: Decimal) -> MenuItem {
    MenuItem {
        id: Identifier::new(id),
        restaurant_id: Identifier::new(restaurant),
        name: name.to_string(),
        description: None,
        price,
    }
}

fn user(id: &str, name: &str) -> User {
    let claims = claims(id);
    User {
        id: Identifier::new(id),
        name: name.to_string(),
        email: format!("{}@mealgate.test", id),
        role: claims.role.parse().unwrap(),
        country: claims.country.parse().unwrap(),
        payment_method: None,
    }
}

/// Two restaurants (one per country) and one user per seeded identity
pub async fn seeded_store() -> Arc<InMemoryStore> {
    let store = InMemoryStore::new();

    store
        .put_restaurant(Restaurant {
            id: Identifier::new("spice-garden"),
            name: "Spice Garden".to_string(),
            description: Some("North Indian".to_string()),
            country: Country::India,
            menu: vec![
                menu_item(PANEER, "spice-garden", "Paneer Tikka", Decimal::new(25000, 2)),
                menu_item(NAAN, "spice-garden", "Garlic Naan", Decimal::new(4000, 2)),
            ],
        })
        .await;
    store
        .put_restaurant(Restaurant {
            id: Identifier::new("burger-palace"),
            name: "Burger Palace".to_string(),
            description: None,
            country: Country::America,
            menu: vec![menu_item(BURGER, "burger-palace", "Classic Burger", Decimal::new(1299, 2))],
        })
        .await;

    for (id, name) in [
        (ADMIN, "Nick Fury"),
        (MANAGER_INDIA, "Captain Marvel"),
        (MANAGER_AMERICA, "Captain America"),
        (MEMBER_INDIA, "Thanos"),
        (MEMBER_INDIA_2, "Thor"),
        (MEMBER_AMERICA, "Travis"),
    ] {
        store.put_user(user(id, name)).await;
    }

    Arc::new(store)
}

pub async fn state_with(config: ServiceConfig) -> AppState<InMemoryStore> {
    AppState::new(seeded_store().await, config)
}

pub async fn state() -> AppState<InMemoryStore> {
    state_with(ServiceConfig::default()).await
}

pub async fn revealing_state() -> AppState<InMemoryStore> {
    state_with(ServiceConfig {
        disclosure: Disclosure::Reveal,
        ..ServiceConfig::default()
    })
    .await
}

pub fn order_of(lines: &[(&str, u32)]) -> CreateOrderRequest {
    CreateOrderRequest {
        items: lines
            .iter()
            .map(|(id, quantity)| OrderLineRequest {
                menu_item_id: Identifier::new(*id),
                quantity: *quantity,
            })
            .collect(),
    }
}
