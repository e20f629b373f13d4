//! Permission evaluator
//!
//! Every action maps to exactly one [`Rule`] in [`Action::rule`]; that match is the
//! whole policy. Call sites ask the evaluator and never branch on roles themselves.

use crate::error::{AuthzError, Result};
use crate::types::{Actor, Country, Role};
use std::fmt;
use tracing::debug;

/// Named actions the policy knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ViewRestaurants,
    CreateOrder,
    PlaceOrder,
    CancelOrder,
    UpdatePaymentMethod,
    /// Admin user directory
    ViewUsers,
    /// Location gate for a record stamped with the given country
    AccessCountryData(Country),
}

/// Predicate shape behind an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Any authenticated actor
    Anyone,
    /// Actor role must be one of these
    AnyOf(&'static [Role]),
    /// ADMIN anywhere, everyone else only in their own country
    AdminOrHomeCountry,
}

const ELEVATED: &[Role] = &[Role::Admin, Role::Manager];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

impl Action {
    /// Wire names of every action, in policy order
    pub const NAMES: [&'static str; 7] = [
        "viewRestaurants",
        "createOrder",
        "placeOrder",
        "cancelOrder",
        "updatePaymentMethod",
        "viewUsers",
        "accessCountryData",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::ViewRestaurants => "viewRestaurants",
            Action::CreateOrder => "createOrder",
            Action::PlaceOrder => "placeOrder",
            Action::CancelOrder => "cancelOrder",
            Action::UpdatePaymentMethod => "updatePaymentMethod",
            Action::ViewUsers => "viewUsers",
            Action::AccessCountryData(_) => "accessCountryData",
        }
    }

    /// The policy table
    pub fn rule(&self) -> Rule {
        match self {
            Action::ViewRestaurants => Rule::Anyone,
            Action::CreateOrder => Rule::Anyone,
            Action::PlaceOrder => Rule::AnyOf(ELEVATED),
            Action::CancelOrder => Rule::AnyOf(ELEVATED),
            Action::UpdatePaymentMethod => Rule::AnyOf(ADMIN_ONLY),
            Action::ViewUsers => Rule::AnyOf(ADMIN_ONLY),
            Action::AccessCountryData(_) => Rule::AdminOrHomeCountry,
        }
    }

    /// Country argument, present only for the location gate
    pub fn target_country(&self) -> Option<Country> {
        match self {
            Action::AccessCountryData(country) => Some(*country),
            _ => None,
        }
    }

    /// Resolve an action by wire name
    ///
    /// # Errors
    ///
    /// Returns `AuthzError::Configuration` if the name is unknown, or if the
    /// country argument is missing for `accessCountryData` or supplied for any
    /// other action.
    pub fn parse(name: &str, country: Option<Country>) -> Result<Self> {
        let action = match (name, country) {
            ("accessCountryData", Some(country)) => Action::AccessCountryData(country),
            ("accessCountryData", None) => {
                return Err(AuthzError::Configuration(
                    "action 'accessCountryData' requires a target country".to_string(),
                ))
            }
            (_, Some(_)) if Self::NAMES.contains(&name) => {
                return Err(AuthzError::Configuration(format!(
                    "action '{}' takes no country argument",
                    name
                )))
            }
            ("viewRestaurants", None) => Action::ViewRestaurants,
            ("createOrder", None) => Action::CreateOrder,
            ("placeOrder", None) => Action::PlaceOrder,
            ("cancelOrder", None) => Action::CancelOrder,
            ("updatePaymentMethod", None) => Action::UpdatePaymentMethod,
            ("viewUsers", None) => Action::ViewUsers,
            _ => {
                return Err(AuthzError::Configuration(format!(
                    "unknown action '{}'",
                    name
                )))
            }
        };

        Ok(action)
    }

    /// Every concrete action, expanding the location gate over all countries
    pub fn all() -> impl Iterator<Item = Action> {
        [
            Action::ViewRestaurants,
            Action::CreateOrder,
            Action::PlaceOrder,
            Action::CancelOrder,
            Action::UpdatePaymentMethod,
            Action::ViewUsers,
        ]
        .into_iter()
        .chain(Country::ALL.into_iter().map(Action::AccessCountryData))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::AccessCountryData(country) => write!(f, "accessCountryData({})", country),
            other => f.write_str(other.name()),
        }
    }
}

impl Rule {
    pub fn allows(&self, actor: &Actor, target: Option<Country>) -> bool {
        match self {
            Rule::Anyone => true,
            Rule::AnyOf(roles) => roles.contains(&actor.role),
            Rule::AdminOrHomeCountry => {
                actor.is_admin() || target.is_some_and(|country| actor.is_in(country))
            }
        }
    }
}

/// Stateless evaluator answering "may this actor perform this action?"
///
/// Holds no state and caches nothing; every call is evaluated fresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionEvaluator;

impl PermissionEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Pure yes/no decision
    pub fn can_perform(&self, actor: &Actor, action: &Action) -> bool {
        action.rule().allows(actor, action.target_country())
    }

    /// Decision for an action given by name, with the optional country argument
    ///
    /// # Errors
    ///
    /// Returns `AuthzError::Configuration` for unknown names or malformed arguments.
    pub fn evaluate(&self, actor: &Actor, name: &str, country: Option<Country>) -> Result<bool> {
        let action = Action::parse(name, country)?;
        Ok(self.can_perform(actor, &action))
    }

    /// Like [`can_perform`](Self::can_perform), but maps a denial to its reason:
    /// `ForbiddenLocation` for the location gate, `ForbiddenAction` otherwise.
    pub fn require(&self, actor: &Actor, action: &Action) -> Result<()> {
        if self.can_perform(actor, action) {
            return Ok(());
        }

        debug!(
            "Denied {} for actor={} role={} country={}",
            action, actor.id, actor.role, actor.country
        );

        match action {
            Action::AccessCountryData(_) => Err(AuthzError::ForbiddenLocation),
            other => Err(AuthzError::ForbiddenAction {
                action: other.name(),
            }),
        }
    }
}
