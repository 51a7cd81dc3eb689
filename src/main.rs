use std::sync::Arc;

use bms_portal::{
    AppState, MemorySessionStore, SessionState, TracingNotifier,
    config::{AppConfig, Env},
    notify::NotifierState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Entry point for the routing and client-configuration layer: loads the
/// configuration, initializes logging for the environment, assembles the
/// shared state, and reports the effective client endpoints and compiled
/// route surface. For a configuration layer, that report is the runnable
/// artifact; the clients and navigator are consumed by the embedding
/// application.
#[tokio::main]
async fn main() {
    // Configuration loading (fail-fast in production).
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // Log filter: RUST_LOG wins, with sensible local defaults.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bms_portal=debug,reqwest=info".into());

    // Structured logging format selected by environment: pretty output for
    // local debugging, JSON for log aggregation in production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("bms-portal starting in {:?} mode", config.env);

    // A fresh process starts logged out; the embedding application fills the
    // session store at login.
    let session: SessionState = Arc::new(MemorySessionStore::new());
    let notifier: NotifierState = Arc::new(TracingNotifier::new());

    let state = AppState::new(config, session, notifier)
        .expect("FATAL: failed to build HTTP clients from configuration");

    tracing::info!(
        catalog = %state.catalog.base_url(),
        knowledge_base = %state.knowledge_base.base_url(),
        knowledge_graph = %state.knowledge_graph.base_url(),
        "HTTP clients configured"
    );

    let entries = state.navigator.table().entries();
    tracing::info!(routes = entries.len(), "route table compiled");
    for route in entries {
        tracing::debug!(
            path = %route.full_path,
            name = route.name.unwrap_or("-"),
            requires_auth = route.requires_auth,
            "route"
        );
    }
}
