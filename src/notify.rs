use std::sync::{Arc, Mutex};

/// Notifier
///
/// Defines the abstract contract for surfacing a user-visible notice.
/// The response interceptor depends on this capability rather than on any
/// concrete display mechanism, so production wiring and tests can supply
/// different implementations without touching the interceptor.
pub trait Notifier: Send + Sync {
    /// Surfaces `message` to the user.
    fn notify(&self, message: &str);
}

/// NotifierState
///
/// The concrete type used to share the notifier across the application state.
pub type NotifierState = Arc<dyn Notifier>;

/// TracingNotifier
///
/// Production notifier: emits the notice as a `warn`-level tracing event.
/// In a headless deployment this is the user-facing surface; a UI shell can
/// substitute its own `Notifier` when one is available.
#[derive(Clone, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(%message, "service notice");
    }
}

/// RecordingNotifier
///
/// Test notifier that records every message it is asked to surface, letting
/// tests assert on notification content without any real display.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages surfaced so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
