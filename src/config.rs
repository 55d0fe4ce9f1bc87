//! Service configuration, read from environment variables at startup.

use std::path::PathBuf;

pub const DEFAULT_HISTORY_LIMIT: usize = 100;
pub const DEFAULT_TABLE: &str = "sessions";

/// Credentials for the hosted store. Present only when both URL and key are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCredentials {
    pub url: String,
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_url: Option<String>,
    pub store_key: Option<String>,
    pub store_table: String,
    /// Upper bound on records returned by `/api/history`.
    pub history_limit: usize,
    pub static_dir: String,
    pub index_file: String,
    pub bind_address: String,
    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a [`Config`] from an arbitrary key lookup. Empty values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            store_url: get("STORE_URL").or_else(|| get("SUPABASE_URL")),
            store_key: get("STORE_KEY").or_else(|| get("SUPABASE_KEY")),
            store_table: get("STORE_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            history_limit: get("HISTORY_LIMIT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_HISTORY_LIMIT),
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "public".to_string()),
            index_file: get("INDEX_FILE").unwrap_or_else(|| "index.html".to_string()),
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1:3000".to_string()),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            log_json: get("LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    pub fn store_credentials(&self) -> Option<StoreCredentials> {
        match (&self.store_url, &self.store_key) {
            (Some(url), Some(key)) => Some(StoreCredentials {
                url: url.clone(),
                key: key.clone(),
            }),
            _ => None,
        }
    }

    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from(&self.static_dir)
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir().join(&self.index_file)
    }
}
