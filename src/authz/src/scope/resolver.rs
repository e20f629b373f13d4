//! Listing filters and the per-record mutation gate

use super::types::{ListFilter, ResourceKind, Scoped};
use crate::error::{AuthzError, Result};
use crate::permission::{Action, PermissionEvaluator};
use crate::types::{Actor, Identifier, Role};
use tracing::debug;

/// Scope resolver turns an actor into listing filters and mutation decisions
///
/// # Thread Safety
///
/// The resolver is stateless and `Copy`; share it freely across tasks.
///
/// # Examples
///
/// ```
/// use mealgate_authz::{Actor, Country, ListFilter, ResourceKind, Role, ScopeResolver};
///
/// let resolver = ScopeResolver::new();
/// let manager = Actor::new("manager-1", Role::Manager, Country::India);
///
/// let filter = resolver.resolve_list_filter(&manager, ResourceKind::Orders).unwrap();
/// assert_eq!(filter, ListFilter::Country(Country::India));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeResolver {
    evaluator: PermissionEvaluator,
}

impl ScopeResolver {
    pub fn new() -> Self {
        Self {
            evaluator: PermissionEvaluator::new(),
        }
    }

    pub fn evaluator(&self) -> &PermissionEvaluator {
        &self.evaluator
    }

    /// Filter bounding what `actor` may list from `kind`
    ///
    /// # Errors
    ///
    /// Returns `AuthzError::ForbiddenAction` when the collection is not visible to
    /// the actor at all (the user directory for non-admins).
    pub fn resolve_list_filter(&self, actor: &Actor, kind: ResourceKind) -> Result<ListFilter> {
        let filter = match kind {
            // Members see only their own orders, even within their country
            ResourceKind::Orders => match actor.role {
                Role::Admin => ListFilter::All,
                Role::Manager => ListFilter::Country(actor.country),
                Role::Member => ListFilter::Owner(actor.id.clone()),
            },
            ResourceKind::Restaurants => {
                self.evaluator.require(actor, &Action::ViewRestaurants)?;
                if actor.is_admin() {
                    ListFilter::All
                } else {
                    ListFilter::Country(actor.country)
                }
            }
            ResourceKind::Users => {
                self.evaluator.require(actor, &Action::ViewUsers)?;
                ListFilter::All
            }
        };

        debug!(
            "List filter for actor={} role={} on {}: {}",
            actor.id, actor.role, kind, filter
        );

        Ok(filter)
    }

    /// Gate a mutation of an already-fetched record
    ///
    /// Clauses are checked in order, and the first failure is returned:
    ///
    /// 1. the action itself (`ForbiddenAction`)
    /// 2. the record exists (`NotFound`)
    /// 3. the location gate on the record's country (`ForbiddenLocation`)
    /// 4. ownership, or ADMIN, or MANAGER of the record's country (`ForbiddenOwnership`)
    ///
    /// The action check runs before the record is looked at, so an actor whose
    /// role never permits the action learns nothing about the record.
    ///
    /// Returns the record on success.
    pub fn authorize_mutation<'r, R: Scoped>(
        &self,
        actor: &Actor,
        action: &Action,
        id: &Identifier,
        record: Option<&'r R>,
    ) -> Result<&'r R> {
        self.evaluator.require(actor, action)?;

        let record = record.ok_or_else(|| AuthzError::NotFound {
            resource: R::RESOURCE,
            id: id.to_string(),
        })?;

        self.evaluator
            .require(actor, &Action::AccessCountryData(record.country()))?;

        if !Self::may_modify(actor, record) {
            debug!(
                "Ownership denied: actor={} role={} on {} {}",
                actor.id,
                actor.role,
                R::RESOURCE,
                record.id()
            );
            return Err(AuthzError::ForbiddenOwnership {
                resource: R::RESOURCE,
            });
        }

        Ok(record)
    }

    /// Owner, ADMIN, or MANAGER of the record's country
    fn may_modify<R: Scoped>(actor: &Actor, record: &R) -> bool {
        record.owner_id() == Some(&actor.id)
            || actor.is_admin()
            || (actor.role == Role::Manager && actor.is_in(record.country()))
    }
}
