//! Handler-boundary error type.
//!
//! Every API handler returns `Result<T, ApiError>`. Each variant maps to one
//! status code and a JSON body of the form `{"error": "..."}`; nothing
//! propagates past the handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::{services::StoreError, types::ErrorResponse};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Store credentials were absent at startup.
    #[error("Supabase not configured")]
    NotConfigured,

    /// `duration` or `type` absent, zero, empty, or of the wrong type.
    #[error("Missing data")]
    MissingData,

    /// The request body was not valid JSON.
    #[error("{0}")]
    InvalidBody(String),

    /// Any failure from the store, surfaced with its raw message.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingData | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotConfigured | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Store(e) => error!(error = %e, "session store request failed"),
            ApiError::NotConfigured => error!("store credentials missing; API request rejected"),
            ApiError::MissingData | ApiError::InvalidBody(_) => {
                debug!(reason = %self, "rejected session payload")
            }
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
