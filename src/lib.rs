// --- Module Structure ---

// Role resolution and the role-header contract.
pub mod auth;
// The three configured HTTP clients and their interceptors.
pub mod clients;
// Immutable runtime configuration.
pub mod config;
// Navigation guard and navigator.
pub mod guard;
// The user-notice capability.
pub mod notify;
// The declarative route table, segregated by role.
pub mod routes;
// The session-scoped identity store.
pub mod session;

// --- Public Re-exports ---

// Core state types for the application entry point.
pub use clients::{CatalogClient, ClientError, KnowledgeBaseClient, KnowledgeGraphClient};
pub use config::AppConfig;
pub use guard::Navigator;
pub use notify::{NotifierState, TracingNotifier};
pub use routes::RouteTable;
pub use session::{MemorySessionStore, SessionState};

/// AppState
///
/// The single container holding the layer's shared services: the loaded
/// configuration, the injected session store and notifier, the three
/// configured HTTP clients, and the navigator over the compiled route table.
/// Everything inside is cheaply cloneable or shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub session: SessionState,
    pub notifier: NotifierState,
    pub catalog: CatalogClient,
    pub knowledge_base: KnowledgeBaseClient,
    pub knowledge_graph: KnowledgeGraphClient,
    pub navigator: std::sync::Arc<Navigator>,
}

impl AppState {
    /// new
    ///
    /// Assembles the full state from a loaded configuration and the injected
    /// session and notifier capabilities: builds all three HTTP clients and
    /// compiles the route table.
    pub fn new(
        config: AppConfig,
        session: SessionState,
        notifier: NotifierState,
    ) -> Result<Self, ClientError> {
        let catalog = CatalogClient::new(&config, session.clone())?;
        let knowledge_base = KnowledgeBaseClient::new(&config, notifier.clone())?;
        let knowledge_graph = KnowledgeGraphClient::new(&config)?;
        let navigator = std::sync::Arc::new(Navigator::new(RouteTable::new(), session.clone()));

        Ok(Self {
            config,
            session,
            notifier,
            catalog,
            knowledge_base,
            knowledge_graph,
            navigator,
        })
    }
}
