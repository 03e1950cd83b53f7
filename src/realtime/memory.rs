//! In-process realtime backend.
//!
//! `MemoryBackend` keeps the listener registry and auth record entirely in
//! memory and delivers events synchronously from [`MemoryBackend::emit`].
//! It exists for tests and local development; a production backend speaks
//! the real transport behind the same trait.

use std::collections::HashMap;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use parking_lot::Mutex;

use crate::realtime::backend::{BackendError, EventCallback, RealtimeBackend, WILDCARD};
use crate::record::{Record, RecordEvent};

struct TopicListener {
    topic: String,
    callback: EventCallback,
}

impl TopicListener {
    fn matches(&self, record_id: &str) -> bool {
        self.topic == WILDCARD || self.topic == record_id
    }
}

/// Backend implementation backed by process-local state.
#[derive(Default)]
pub struct MemoryBackend {
    listeners: Mutex<HashMap<String, Vec<TopicListener>>>,
    auth: Mutex<Option<Record>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` as the authenticated identity.
    pub fn set_auth_record(&self, record: Record) {
        *self.auth.lock() = Some(record);
    }

    /// Clears the authenticated identity.
    pub fn clear_auth_record(&self) {
        *self.auth.lock() = None;
    }

    /// Delivers `event` to every matching listener on `collection` and
    /// returns how many listeners were invoked.
    ///
    /// A listener matches when its topic is the wildcard or equals the
    /// event's record id. Callbacks run on the calling thread, outside the
    /// registry lock, in registration order.
    pub fn emit(&self, collection: &str, event: RecordEvent) -> usize {
        let matching: Vec<EventCallback> = {
            let listeners = self.listeners.lock();
            listeners
                .get(collection)
                .map(|entries| {
                    entries
                        .iter()
                        .filter(|listener| listener.matches(&event.record.id))
                        .map(|listener| listener.callback.clone())
                        .collect()
                })
                .unwrap_or_default()
        };

        for callback in &matching {
            callback(event.clone());
        }
        matching.len()
    }

    /// Returns the number of active listeners on `collection`.
    pub fn listener_count(&self, collection: &str) -> usize {
        self.listeners
            .lock()
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

impl RealtimeBackend for MemoryBackend {
    fn subscribe(
        &self,
        collection: &str,
        topic: &str,
        callback: EventCallback,
    ) -> BoxFuture<'_, Result<(), BackendError>> {
        let collection = collection.to_string();
        let listener = TopicListener {
            topic: topic.to_string(),
            callback,
        };
        async move {
            self.listeners
                .lock()
                .entry(collection)
                .or_default()
                .push(listener);
            Ok(())
        }
        .boxed()
    }

    fn unsubscribe(
        &self,
        collection: &str,
        topic: Option<&str>,
    ) -> BoxFuture<'_, Result<(), BackendError>> {
        let collection = collection.to_string();
        let topic = topic.map(str::to_string);
        async move {
            let mut listeners = self.listeners.lock();
            match topic {
                Some(topic) => {
                    if let Some(entries) = listeners.get_mut(&collection) {
                        entries.retain(|listener| listener.topic != topic);
                    }
                }
                None => {
                    listeners.remove(&collection);
                }
            }
            Ok(())
        }
        .boxed()
    }

    fn auth_record(&self) -> Option<Record> {
        self.auth.lock().clone()
    }
}
