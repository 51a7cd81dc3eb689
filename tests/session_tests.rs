use std::sync::Arc;

use bms_portal::AppState;
use bms_portal::config::AppConfig;
use bms_portal::notify::{NotifierState, RecordingNotifier};
use bms_portal::session::{
    IDENTITY_KEYS, MemorySessionStore, SessionState, SessionStore, is_authenticated,
};

// --- Session store lifecycle ---

#[test]
fn fresh_store_is_unauthenticated() {
    let store = MemorySessionStore::new();
    assert!(!is_authenticated(&store));
}

#[test]
fn each_identity_key_authenticates_on_its_own() {
    for key in IDENTITY_KEYS {
        let store = MemorySessionStore::new();
        store.insert(key, r#"{"id": 1}"#);
        assert!(is_authenticated(&store), "key {key} must authenticate");
    }
}

#[test]
fn login_logout_lifecycle_round_trips() {
    let store = MemorySessionStore::new();

    store.insert("user", r#"{"adminName": "alice"}"#);
    assert!(is_authenticated(&store));
    assert!(store.get("user").is_some());

    store.remove("user");
    assert!(!is_authenticated(&store));

    store.insert("reader", "{}");
    store.insert("admin", "{}");
    store.clear();
    assert!(!is_authenticated(&store));
}

#[test]
fn clones_share_the_same_entries() {
    // The bootstrap hands one handle to the clients and one to the
    // navigator; a login through either must be visible to both.
    let store = MemorySessionStore::new();
    let clone = store.clone();

    store.insert("user", "{}");
    assert!(is_authenticated(&clone));
}

// --- State assembly ---

#[test]
fn app_state_builds_from_default_config() {
    let session: SessionState = Arc::new(MemorySessionStore::new());
    let notifier: NotifierState = Arc::new(RecordingNotifier::new());

    let state = AppState::new(AppConfig::default(), session, notifier)
        .expect("state must build from defaults");

    assert_eq!(state.catalog.base_url(), "http://localhost:8089/bms");
    assert_eq!(state.knowledge_base.base_url(), "http://localhost:8089/bms");
    assert_eq!(state.knowledge_graph.base_url(), "http://localhost:5000");
    assert!(!state.navigator.table().entries().is_empty());
}
