use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing::{info, warn};

use session_log::{
    routes,
    services::SupabaseStore,
    telemetry, AppState, Config, StoreHandle,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    telemetry::init(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "session_log starting");

    let store = match config.store_credentials() {
        Some(credentials) => {
            let store = SupabaseStore::new(&credentials, &config.store_table)?;
            info!(table_url = %store.table_url(), "session store configured");
            StoreHandle::Configured(Arc::new(store))
        }
        None => {
            warn!("STORE_URL/STORE_KEY not set; API routes will answer 500 until configured");
            StoreHandle::Unconfigured
        }
    };

    let addr: SocketAddr = config.bind_address.parse()?;
    let static_dir = config.static_dir();
    let app = routes::build(AppState::new(config, store));

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, static_dir = %static_dir.display(), "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("session_log stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received");
}
