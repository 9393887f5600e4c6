mod api;
mod middleware;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use ndlocator_core::{load_customization, SearchController, CUSTOMIZATION_FILE};
use ndlocator_store::{FetchOutcome, RecordClient, ResellerStore};

use crate::api::{build_app, AppState};
use crate::middleware::AuthState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ndlocator_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = RecordClient::new(
        &config.remote_url,
        config.remote_api_key.as_deref(),
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let mut store = ResellerStore::new(client);
    if store.fetch_all().await == FetchOutcome::Fallback {
        tracing::warn!("serving the static fallback dataset; remote store unreachable at startup");
    }

    let customization_path: PathBuf = config.data_dir.join(CUSTOMIZATION_FILE);
    let customization = load_customization(&customization_path);

    let auth = AuthState::from_env(matches!(
        config.env,
        ndlocator_core::Environment::Development
    ))?;
    let state = AppState {
        store: Arc::new(RwLock::new(store)),
        search: Arc::new(RwLock::new(SearchController::default())),
        customization: Arc::new(RwLock::new(customization)),
        customization_path: Arc::new(customization_path),
    };
    let app = build_app(state, auth);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
