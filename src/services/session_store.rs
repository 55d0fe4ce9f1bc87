use async_trait::async_trait;
use thiserror::Error;

use crate::types::{NewSession, SessionRecord};

/// Failures reported by a [`SessionStore`]. `Display` carries the store's own
/// message text, which is what callers see in error responses.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Decode(String),
}

/// Insert-and-select access to the hosted `sessions` table.
///
/// Handlers hold an `Arc<dyn SessionStore>`; implementations must not cache
/// rows between calls.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Insert one row and return what the store persisted (with `id` and
    /// `created_at` filled in).
    async fn insert(&self, session: NewSession) -> Result<Vec<SessionRecord>, StoreError>;

    /// Newest rows first, ordered by `created_at`, at most `limit` of them.
    async fn recent(&self, limit: usize) -> Result<Vec<SessionRecord>, StoreError>;
}
