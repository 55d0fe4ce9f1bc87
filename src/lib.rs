pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod types;

pub use config::Config;
pub use error::ApiError;
pub use state::{AppState, StoreHandle};
