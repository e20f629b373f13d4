//! Policy matrix export

use mealgate_authz::{Action, Actor, Country, ResourceKind, Role, ScopeResolver};
use serde::Serialize;

/// One evaluated cell of the action table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRow {
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_country: Option<Country>,
    pub role: Role,
    pub actor_country: Country,
    pub allowed: bool,
}

/// Listing filter (or denial code) for one role, country and collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRow {
    pub resource: ResourceKind,
    pub role: Role,
    pub actor_country: Country,
    pub filter: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PolicyMatrix {
    pub version: &'static str,
    pub decisions: Vec<DecisionRow>,
    pub filters: Vec<FilterRow>,
}

/// Evaluate every action and listing filter for a representative actor of each
/// role and country
pub fn policy_matrix() -> PolicyMatrix {
    let resolver = ScopeResolver::new();
    let mut decisions = Vec::new();
    let mut filters = Vec::new();

    for role in Role::ALL {
        for country in Country::ALL {
            let actor = Actor::new(format!("{}-{}", role, country), role, country);

            for action in Action::all() {
                decisions.push(DecisionRow {
                    action: action.name(),
                    target_country: action.target_country(),
                    role,
                    actor_country: country,
                    allowed: resolver.evaluator().can_perform(&actor, &action),
                });
            }

            for resource in ResourceKind::ALL {
                let filter = match resolver.resolve_list_filter(&actor, resource) {
                    Ok(filter) => filter.to_string(),
                    Err(err) => err.code().to_string(),
                };
                filters.push(FilterRow {
                    resource,
                    role,
                    actor_country: country,
                    filter,
                });
            }
        }
    }

    PolicyMatrix {
        version: mealgate_authz::VERSION,
        decisions,
        filters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_is_complete() {
        let matrix = policy_matrix();
        let actions = Action::all().count();

        assert_eq!(matrix.decisions.len(), Role::ALL.len() * Country::ALL.len() * actions);
        assert_eq!(
            matrix.filters.len(),
            Role::ALL.len() * Country::ALL.len() * ResourceKind::ALL.len()
        );
    }

    #[test]
    fn test_matrix_rows() {
        let matrix = policy_matrix();

        let member_users = matrix
            .filters
            .iter()
            .find(|row| row.role == Role::Member && row.resource == ResourceKind::Users)
            .unwrap();
        assert_eq!(member_users.filter, "forbidden_action");

        let manager_india_orders = matrix
            .filters
            .iter()
            .find(|row| {
                row.role == Role::Manager
                    && row.actor_country == Country::India
                    && row.resource == ResourceKind::Orders
            })
            .unwrap();
        assert_eq!(manager_india_orders.filter, "country = INDIA");

        let cross_country = matrix
            .decisions
            .iter()
            .find(|row| {
                row.role == Role::Manager
                    && row.actor_country == Country::America
                    && row.target_country == Some(Country::India)
            })
            .unwrap();
        assert!(!cross_country.allowed);
    }

    #[test]
    fn test_matrix_serializes() {
        let json = serde_json::to_value(policy_matrix()).unwrap();
        assert!(json["decisions"].as_array().is_some_and(|rows| !rows.is_empty()));
        assert_eq!(json["decisions"][0]["action"], "viewRestaurants");
        assert_eq!(json["decisions"][0]["role"], "ADMIN");
    }
}
