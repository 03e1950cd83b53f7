//! Boundary to the external realtime client.
//!
//! Connection management, event delivery, reconnection, and auth persistence
//! are owned by the backend implementation behind [`RealtimeBackend`]; this
//! crate only registers interest and reads the cached auth state.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::record::{Record, RecordEvent};

/// Topic matching every record of a collection.
pub const WILDCARD: &str = "*";

/// Listener invoked for each change event on a subscribed topic.
pub type EventCallback = Arc<dyn Fn(RecordEvent) + Send + Sync>;

/// Capability surface of the external realtime client.
///
/// Implementations serialize their own internal state; callers share one
/// handle (`Arc<dyn RealtimeBackend>`) across all subscriptions.
pub trait RealtimeBackend: Send + Sync {
    /// Registers a persistent listener for `topic` on `collection`.
    ///
    /// `topic` is a record id, or [`WILDCARD`] for every record of the
    /// collection. The returned future resolves once the backend has
    /// confirmed the registration; after that, `callback` fires for each
    /// change event until the listener is unsubscribed. Unsubscribing must
    /// drop the retained callback.
    ///
    /// Events for a given record are delivered in occurrence order. No
    /// ordering is guaranteed across collections.
    fn subscribe(
        &self,
        collection: &str,
        topic: &str,
        callback: EventCallback,
    ) -> BoxFuture<'_, Result<(), BackendError>>;

    /// Tears down listeners on `collection`.
    ///
    /// `topic: None` removes every listener on the collection. Succeeds when
    /// no matching listener is active.
    fn unsubscribe(
        &self,
        collection: &str,
        topic: Option<&str>,
    ) -> BoxFuture<'_, Result<(), BackendError>>;

    /// Returns the last-known locally cached auth record, without any
    /// network check.
    fn auth_record(&self) -> Option<Record>;
}

/// Errors reported by a backend during subscribe/unsubscribe.
///
/// The binding layer returns these unchanged; it performs no validation and
/// no recovery of its own.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Transport-level failure while talking to the backend.
    #[error("transport error: {0}")]
    Transport(String),

    /// Backend refused the request (bad identifier, auth rejection, ...).
    #[error("backend rejected request ({code}): {message}")]
    Rejected { code: u16, message: String },

    /// Backend handle has been shut down.
    #[error("backend connection is closed")]
    Closed,
}
