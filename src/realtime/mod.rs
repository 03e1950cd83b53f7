//! Realtime subscription modules.
//!
//! - `backend`: boundary trait for the external realtime client.
//! - `binding`: named subscribe/unsubscribe operations per collection.
//! - `feed`: channel-backed event sequences over the same subscriptions.
//! - `memory`: in-process backend for tests and local development.

/// Boundary trait and error contract for the external realtime client.
pub mod backend;
/// Collection-scoped subscription operations and the auth accessor.
pub mod binding;
/// Channel-backed record event sequences.
pub mod feed;
/// In-process backend implementation.
pub mod memory;
