//! Shared service state

use crate::config::{Disclosure, ServiceConfig};
use crate::error::{ServiceError, ServiceResult};
use crate::store::Store;
use mealgate_authz::{AuthzError, OrderStatus, PermissionEvaluator, ScopeResolver};
use std::sync::Arc;
use tracing::warn;

/// Everything a handler needs: the injected store, configuration and resolver
pub struct AppState<S> {
    store: Arc<S>,
    config: ServiceConfig,
    resolver: ScopeResolver,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
            resolver: self.resolver,
        }
    }
}

impl<S: Store> AppState<S> {
    pub fn new(store: Arc<S>, config: ServiceConfig) -> Self {
        Self {
            store,
            config,
            resolver: ScopeResolver::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn resolver(&self) -> &ScopeResolver {
        &self.resolver
    }

    pub fn evaluator(&self) -> &PermissionEvaluator {
        self.resolver.evaluator()
    }

    /// Apply the disclosure policy to a denial on a single record
    pub(crate) fn disclose(&self, err: AuthzError, resource: &'static str, id: &str) -> ServiceError {
        if err.is_forbidden() {
            warn!("Denied {} '{}': {}", resource, id, err.code());
        }

        match self.config.disclosure {
            Disclosure::Conceal => err.conceal(resource, id).into(),
            Disclosure::Reveal => err.into(),
        }
    }

    /// Status change check, active only when transition enforcement is on
    pub(crate) fn check_transition(&self, from: OrderStatus, to: OrderStatus) -> ServiceResult<()> {
        if !self.config.enforce_status_transitions || from == to || from.can_transition_to(to) {
            return Ok(());
        }

        Err(ServiceError::InvalidTransition { from, to })
    }
}
