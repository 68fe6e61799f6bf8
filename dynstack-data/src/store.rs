//! Observable flag store.
//!
//! Holds named boolean flags and broadcasts a [`StoreEvent`] whenever one of
//! them changes. Whoever owns the layout subscribes and re-runs the pass on
//! each event, so the store is the only thing tap handlers touch.

use indexmap::IndexMap;
use tokio::sync::broadcast;

/// Capacity of the change channel.
const EVENT_CAPACITY: usize = 64;

/// A change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// `key` now holds `value`.
    Changed { key: String, value: bool },
}

/// Named boolean flags with change notification.
#[derive(Debug)]
pub struct Store {
    flags: IndexMap<String, bool>,
    event_tx: broadcast::Sender<StoreEvent>,
}

impl Store {
    /// Create a store seeded with `initial` flags, plus a receiver for its changes.
    pub fn new<K: Into<String>>(
        initial: impl IntoIterator<Item = (K, bool)>,
    ) -> (Self, broadcast::Receiver<StoreEvent>) {
        let (event_tx, event_rx) = broadcast::channel(EVENT_CAPACITY);
        let flags = initial
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        (Self { flags, event_tx }, event_rx)
    }

    /// Subscribe to change events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.event_tx.subscribe()
    }

    /// Read a flag. Unknown keys read as `false`.
    pub fn get(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Write a flag, notifying subscribers if the value changed.
    ///
    /// Returns whether the stored value changed.
    pub fn set(&mut self, key: &str, value: bool) -> bool {
        if self.flags.get(key) == Some(&value) {
            return false;
        }
        self.flags.insert(key.to_string(), value);
        tracing::debug!("Store flag {} = {}", key, value);
        // No subscribers is fine; the value is stored either way.
        let _ = self.event_tx.send(StoreEvent::Changed {
            key: key.to_string(),
            value,
        });
        true
    }

    /// Flip a flag and return its new value.
    pub fn toggle(&mut self, key: &str) -> bool {
        let value = !self.get(key);
        self.set(key, value);
        value
    }

    /// Copy of every flag, in insertion order.
    pub fn snapshot(&self) -> Vec<(String, bool)> {
        self.flags
            .iter()
            .map(|(key, value)| (key.clone(), *value))
            .collect()
    }
}
