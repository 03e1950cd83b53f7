//! Client-side bindings for the DKP auction house realtime backend.
//!
//! The crate is organized by concern:
//! - `record`: record and change-event payload types.
//! - `realtime`: backend boundary, subscription bindings, and event feeds.
//! - `version`: build-time version info.

/// Record and change-event payload types.
pub mod record;
/// Backend boundary, subscription bindings, and event feeds.
pub mod realtime;
/// Build-time version info.
pub mod version;
