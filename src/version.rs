//! Build-time version info.
//!
//! The three fields are injected through environment variables when the
//! crate is compiled (typically by CI) and fall back to literal defaults in
//! local builds, so they are always non-empty.

use serde::Serialize;

/// Fallback when `DKP_APP_VERSION` is unset at build time.
pub const DEFAULT_VERSION: &str = "dev";
/// Fallback when `DKP_APP_COMMIT` is unset at build time.
pub const DEFAULT_COMMIT: &str = "unknown";
/// Fallback when `DKP_APP_BUILD_DATE` is unset at build time.
pub const DEFAULT_BUILD_DATE: &str = "unknown";

/// Read-only version triple resolved once at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    /// Release version, or `"dev"`.
    pub version: &'static str,
    /// Source commit hash, or `"unknown"`.
    pub commit: &'static str,
    /// Build date, or `"unknown"`.
    pub date: &'static str,
}

/// Version info for this build of the crate.
pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: or_fallback(option_env!("DKP_APP_VERSION"), DEFAULT_VERSION),
    commit: or_fallback(option_env!("DKP_APP_COMMIT"), DEFAULT_COMMIT),
    date: or_fallback(option_env!("DKP_APP_BUILD_DATE"), DEFAULT_BUILD_DATE),
};

const fn or_fallback(value: Option<&'static str>, fallback: &'static str) -> &'static str {
    match value {
        Some(value) => {
            if value.is_empty() {
                fallback
            } else {
                value
            }
        }
        None => fallback,
    }
}
