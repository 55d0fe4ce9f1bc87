use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use tracing::info;

use crate::{
    error::ApiError,
    state::AppState,
    types::{NewSession, SaveSessionResponse, SessionRecord},
};

pub async fn save_session(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveSessionResponse>), ApiError> {
    // Configuration is checked before the body is looked at.
    let store = state.store()?;

    let Json(body) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    let session = parse_new_session(&body)?;

    let data = store.insert(session).await?;
    info!(rows = data.len(), "session saved");

    Ok((StatusCode::CREATED, Json(SaveSessionResponse::saved(data))))
}

pub async fn history(State(state): State<AppState>) -> Result<Json<Vec<SessionRecord>>, ApiError> {
    let store = state.store()?;
    let limit = state.config.history_limit;

    let mut records = store.recent(limit).await?;
    records.truncate(limit);

    Ok(Json(records))
}

/// Extract `duration` and `type` from a request body.
///
/// A field counts as missing when it is absent, `null`, of the wrong JSON
/// type, zero, or empty. Zero-length sessions are therefore rejected.
pub fn parse_new_session(body: &Value) -> Result<NewSession, ApiError> {
    let duration = match body.get("duration") {
        Some(Value::Number(n)) if !is_zero(n) => n.clone(),
        _ => return Err(ApiError::MissingData),
    };
    let kind = match body.get("type") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err(ApiError::MissingData),
    };
    Ok(NewSession { duration, kind })
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64().map_or(false, |v| v == 0.0)
}
