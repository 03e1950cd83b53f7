//! Collection-scoped subscription operations.
//!
//! `RealtimeBinding` wraps an injected backend handle and exposes the
//! auction/user subscription pairs plus the synchronous auth accessor. It
//! forwards everything to the backend; failures come back unchanged.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::realtime::backend::{BackendError, EventCallback, RealtimeBackend};
use crate::realtime::feed::RecordFeed;
use crate::record::Record;

/// Collection holding auction records.
pub const AUCTIONS_COLLECTION: &str = "auctions";
/// Collection holding user records.
pub const USERS_COLLECTION: &str = "users";

/// Behavior switches for a binding handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BindingOptions {
    /// Tear down both collections' listeners when the binding is dropped.
    ///
    /// Off by default: subscriptions are owned by the backend handle and
    /// outlive any particular binding, so transient owners (a view, a task)
    /// can come and go without killing live listeners.
    pub cancel_on_drop: bool,
}

/// Named subscribe/unsubscribe operations over one backend handle.
pub struct RealtimeBinding {
    backend: Arc<dyn RealtimeBackend>,
    options: BindingOptions,
}

impl RealtimeBinding {
    /// Creates a binding with default options.
    pub fn new(backend: Arc<dyn RealtimeBackend>) -> Self {
        Self::with_options(backend, BindingOptions::default())
    }

    /// Creates a binding with explicit options.
    pub fn with_options(backend: Arc<dyn RealtimeBackend>, options: BindingOptions) -> Self {
        Self { backend, options }
    }

    /// Registers interest in change events for one auction record.
    ///
    /// `callback` is invoked with the updated record on every change event
    /// delivered by the backend, until
    /// [`unsubscribe_from_auction_updates`](Self::unsubscribe_from_auction_updates)
    /// is called. Pass [`WILDCARD`](crate::realtime::backend::WILDCARD) as
    /// `record_id` to watch the whole collection.
    pub async fn subscribe_to_auction_update<F>(
        &self,
        record_id: &str,
        callback: F,
    ) -> Result<(), BackendError>
    where
        F: Fn(Record) + Send + Sync + 'static,
    {
        self.subscribe_record(AUCTIONS_COLLECTION, record_id, callback)
            .await
    }

    /// Cancels every active auction subscription, regardless of record id.
    ///
    /// Succeeds when nothing is subscribed.
    pub async fn unsubscribe_from_auction_updates(&self) -> Result<(), BackendError> {
        self.backend.unsubscribe(AUCTIONS_COLLECTION, None).await
    }

    /// Registers interest in change events for one user record.
    ///
    /// Same contract as
    /// [`subscribe_to_auction_update`](Self::subscribe_to_auction_update),
    /// scoped to the users collection.
    pub async fn subscribe_to_user_update<F>(
        &self,
        user_id: &str,
        callback: F,
    ) -> Result<(), BackendError>
    where
        F: Fn(Record) + Send + Sync + 'static,
    {
        self.subscribe_record(USERS_COLLECTION, user_id, callback)
            .await
    }

    /// Cancels every active user subscription, regardless of record id.
    pub async fn unsubscribe_from_user_updates(&self) -> Result<(), BackendError> {
        self.backend.unsubscribe(USERS_COLLECTION, None).await
    }

    /// Returns the currently authenticated identity, or `None` when
    /// unauthenticated.
    ///
    /// Reads the backend's cached local auth state only; never a network
    /// check, never an error.
    pub fn current_user(&self) -> Option<Record> {
        self.backend.auth_record()
    }

    /// Opens an event feed for one auction record.
    ///
    /// The feed ends after
    /// [`unsubscribe_from_auction_updates`](Self::unsubscribe_from_auction_updates);
    /// call this again to restart it.
    pub async fn auction_feed(&self, record_id: &str) -> Result<RecordFeed, BackendError> {
        self.open_feed(AUCTIONS_COLLECTION, record_id).await
    }

    /// Opens an event feed for one user record.
    pub async fn user_feed(&self, user_id: &str) -> Result<RecordFeed, BackendError> {
        self.open_feed(USERS_COLLECTION, user_id).await
    }

    async fn subscribe_record<F>(
        &self,
        collection: &'static str,
        topic: &str,
        callback: F,
    ) -> Result<(), BackendError>
    where
        F: Fn(Record) + Send + Sync + 'static,
    {
        let handler: EventCallback = Arc::new(move |event| {
            debug!(
                event = "record_update",
                collection,
                action = %event.action,
                id = %event.record.id
            );
            callback(event.record);
        });
        self.backend.subscribe(collection, topic, handler).await
    }

    async fn open_feed(
        &self,
        collection: &'static str,
        topic: &str,
    ) -> Result<RecordFeed, BackendError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let handler: EventCallback = Arc::new(move |event| {
            debug!(
                event = "record_update",
                collection,
                action = %event.action,
                id = %event.record.id
            );
            // Feed may already be gone; the subscription stays until the
            // collection is unsubscribed.
            let _ = tx.send(event);
        });
        self.backend.subscribe(collection, topic, handler).await?;
        Ok(RecordFeed::new(rx))
    }
}

impl Drop for RealtimeBinding {
    fn drop(&mut self) {
        if !self.options.cancel_on_drop {
            return;
        }
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!(event = "drop_teardown_skipped", reason = "no async runtime");
            return;
        };
        for collection in [AUCTIONS_COLLECTION, USERS_COLLECTION] {
            let backend = Arc::clone(&self.backend);
            handle.spawn(async move {
                if let Err(error) = backend.unsubscribe(collection, None).await {
                    warn!(event = "drop_unsubscribe_failed", collection, error = %error);
                }
            });
        }
    }
}
