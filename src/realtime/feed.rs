//! Channel-backed record event sequences.
//!
//! A feed is the sequence view of one subscription: events arrive in
//! delivery order, and the sequence terminates when the subscription's
//! collection is unsubscribed (the backend drops the producing callback).

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use tokio::sync::mpsc;

use crate::record::RecordEvent;

/// Asynchronous sequence of change events for one subscribed record.
///
/// Produced by
/// [`RealtimeBinding::auction_feed`](crate::realtime::binding::RealtimeBinding::auction_feed)
/// and
/// [`RealtimeBinding::user_feed`](crate::realtime::binding::RealtimeBinding::user_feed).
#[derive(Debug)]
pub struct RecordFeed {
    rx: mpsc::UnboundedReceiver<RecordEvent>,
}

impl RecordFeed {
    pub(crate) fn new(rx: mpsc::UnboundedReceiver<RecordEvent>) -> Self {
        Self { rx }
    }

    /// Receives the next change event, or `None` once the subscription has
    /// been torn down.
    pub async fn recv(&mut self) -> Option<RecordEvent> {
        self.rx.recv().await
    }
}

impl Stream for RecordFeed {
    type Item = RecordEvent;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}
