//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::{config::Config, error::ApiError, services::SessionStore};

/// Whether a store client was built at startup. Decided once and never changed.
#[derive(Clone)]
pub enum StoreHandle {
    Configured(Arc<dyn SessionStore>),
    Unconfigured,
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreHandle::Configured(_) => write!(f, "StoreHandle::Configured"),
            StoreHandle::Unconfigured => write!(f, "StoreHandle::Unconfigured"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: StoreHandle,
}

impl AppState {
    pub fn new(config: Config, store: StoreHandle) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// The store client, or [`ApiError::NotConfigured`] when credentials were absent.
    pub fn store(&self) -> Result<&dyn SessionStore, ApiError> {
        match &self.store {
            StoreHandle::Configured(store) => Ok(store.as_ref()),
            StoreHandle::Unconfigured => Err(ApiError::NotConfigured),
        }
    }
}
