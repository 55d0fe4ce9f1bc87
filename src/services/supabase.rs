use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::StoreCredentials,
    services::session_store::{SessionStore, StoreError},
    types::{NewSession, SessionRecord},
};

/// PostgREST error payload, e.g. `{"code":"42P01","message":"relation ... does not exist"}`.
#[derive(Deserialize)]
struct RestError {
    message: Option<String>,
}

/// [`SessionStore`] backed by a hosted Supabase project, spoken to over its
/// PostgREST interface.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: Client,
    table_url: String,
    key: String,
}

impl SupabaseStore {
    pub fn new(credentials: &StoreCredentials, table: &str) -> Result<Self, StoreError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, credentials, table))
    }

    pub fn with_client(client: Client, credentials: &StoreCredentials, table: &str) -> Self {
        let base = credentials.url.trim_end_matches('/');
        Self {
            client,
            table_url: format!("{}/rest/v1/{}", base, table),
            key: credentials.key.clone(),
        }
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.key))
    }

    async fn read_rows(response: Response) -> Result<Vec<SessionRecord>, StoreError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<RestError>(&body)
                .ok()
                .and_then(|e| e.message)
                .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl SessionStore for SupabaseStore {
    async fn insert(&self, session: NewSession) -> Result<Vec<SessionRecord>, StoreError> {
        debug!(table_url = %self.table_url, "inserting session");
        let response = self
            .authorized(self.client.post(&self.table_url))
            .header("Prefer", "return=representation")
            .json(&session)
            .send()
            .await?;
        Self::read_rows(response).await
    }

    async fn recent(&self, limit: usize) -> Result<Vec<SessionRecord>, StoreError> {
        debug!(table_url = %self.table_url, limit, "fetching session history");
        let limit = limit.to_string();
        let response = self
            .authorized(self.client.get(&self.table_url))
            .query(&[
                ("select", "*"),
                ("order", "created_at.desc"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;
        Self::read_rows(response).await
    }
}
