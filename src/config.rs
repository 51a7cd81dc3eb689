use std::env;
use std::time::Duration;

/// AppConfig
///
/// Holds the HTTP-client and routing layer's entire configuration state.
/// The struct is immutable once loaded, so every client built from it sees
/// the same base URLs and timeouts for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Base URL of the primary backend proxy (book management service).
    pub catalog_base_url: String,
    // Base URL of the knowledge base service, reached through the same proxy.
    pub knowledge_base_base_url: String,
    // Base URL of the standalone knowledge graph service.
    pub knowledge_graph_base_url: String,
    // Per-client request timeouts. Fixed values; there is no retry layer,
    // so a timed-out request surfaces to its caller as a plain failure.
    pub catalog_timeout: Duration,
    pub knowledge_base_timeout: Duration,
    pub knowledge_graph_timeout: Duration,
    // Runtime environment marker. Controls log formatting at startup.
    pub env: Env,
}

/// Env
///
/// Defines the runtime context, used to switch between human-readable local
/// logging and JSON production logging, and to decide whether missing
/// endpoint configuration is fatal.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

// Local development defaults: the backend proxy and the knowledge graph
// service as they run in the developer setup.
const DEFAULT_CATALOG_BASE_URL: &str = "http://localhost:8089/bms";
const DEFAULT_KNOWLEDGE_GRAPH_BASE_URL: &str = "http://localhost:5000";

const CATALOG_TIMEOUT: Duration = Duration::from_secs(20);
const KNOWLEDGE_BASE_TIMEOUT: Duration = Duration::from_secs(30);
const KNOWLEDGE_GRAPH_TIMEOUT: Duration = Duration::from_secs(30);

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for
    /// test setup, without requiring any environment variables to be set.
    fn default() -> Self {
        Self {
            catalog_base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            knowledge_base_base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            knowledge_graph_base_url: DEFAULT_KNOWLEDGE_GRAPH_BASE_URL.to_string(),
            catalog_timeout: CATALOG_TIMEOUT,
            knowledge_base_timeout: KNOWLEDGE_BASE_TIMEOUT,
            knowledge_graph_timeout: KNOWLEDGE_GRAPH_TIMEOUT,
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the configuration at startup.
    /// Reads all parameters from environment variables and implements the
    /// fail-fast principle for the production environment.
    ///
    /// # Panics
    /// Panics if a base URL required in production is not set. Local mode
    /// falls back to the developer defaults instead.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let (catalog_base_url, knowledge_base_base_url, knowledge_graph_base_url) = match env {
            Env::Local => (
                env::var("BMS_BASE_URL").unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_string()),
                // The knowledge base rides the same proxy unless overridden.
                env::var("KB_BASE_URL").unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_string()),
                env::var("KG_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_KNOWLEDGE_GRAPH_BASE_URL.to_string()),
            ),
            Env::Production => {
                let catalog =
                    env::var("BMS_BASE_URL").expect("FATAL: BMS_BASE_URL required in production");
                // The knowledge base defaults to the same proxy path in
                // production too; only the graph service must be explicit.
                let kb = env::var("KB_BASE_URL").unwrap_or_else(|_| catalog.clone());
                let kg =
                    env::var("KG_BASE_URL").expect("FATAL: KG_BASE_URL required in production");
                (catalog, kb, kg)
            }
        };

        Self {
            catalog_base_url,
            knowledge_base_base_url,
            knowledge_graph_base_url,
            catalog_timeout: CATALOG_TIMEOUT,
            knowledge_base_timeout: KNOWLEDGE_BASE_TIMEOUT,
            knowledge_graph_timeout: KNOWLEDGE_GRAPH_TIMEOUT,
            env,
        }
    }
}
