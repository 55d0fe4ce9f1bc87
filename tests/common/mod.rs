#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use serde_json::{Map, Value};
use tower::ServiceExt;

use session_log::{
    services::{SessionStore, StoreError},
    types::{NewSession, RecordId, SessionRecord},
};

/// In-memory stand-in for the hosted table. Assigns ids and monotonically
/// increasing `created_at` stamps.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<SessionRecord>>,
    clock: AtomicUsize,
    fail_with: Option<String>,
}

impl MemoryStore {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.fail_with {
            Some(message) => Err(StoreError::Api {
                status: 503,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn insert(&self, session: NewSession) -> Result<Vec<SessionRecord>, StoreError> {
        self.check()?;
        let tick = self.clock.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let record = SessionRecord {
            id: RecordId::Int(rows.len() as i64 + 1),
            duration: Some(session.duration),
            kind: Some(session.kind),
            created_at: Some(format!("2024-05-01T10:{:02}:{:02}+00:00", tick / 60, tick % 60)),
            extra: Map::new(),
        };
        rows.push(record.clone());
        Ok(vec![record])
    }

    async fn recent(&self, limit: usize) -> Result<Vec<SessionRecord>, StoreError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(limit);
        Ok(rows)
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
