//! Logging facilities for onevone.
//!
//! onevone uses the `tracing` crate for instrumentation. Every subsystem logs
//! under a fixed target so output can be filtered per component:
//!
//! ```ignore
//! // Show widget transitions and bootstrap progress only
//! RUST_LOG=onevone::widget=debug,onevone::bootstrap=info
//! ```
//!
//! Applications that do not install their own subscriber can call [`init`].

use tracing_subscriber::EnvFilter;

use crate::error::LoggingError;

/// Span names used throughout onevone for tracing.
pub mod span_names {
    /// Dataset fetch and index construction.
    pub const DATASET_LOAD: &str = "onevone::dataset_load";
    /// Widget binding over the page.
    pub const INITIALIZE: &str = "onevone::initialize";
    /// Signal emission span.
    pub const SIGNAL: &str = "onevone::signal";
}

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "onevone_core::signal";
    /// HTTP client target.
    pub const HTTP: &str = "onevone_net::http";
    /// Champion API target.
    pub const CHAMPIONS: &str = "onevone_net::champions";
    /// Autocomplete widget target.
    pub const WIDGET: &str = "onevone::widget";
    /// Page event routing target.
    pub const PAGE: &str = "onevone::page";
    /// Bootstrap target.
    pub const BOOTSTRAP: &str = "onevone::bootstrap";
    /// Matchup navigation target.
    pub const MATCHUP: &str = "onevone::matchup";
    /// Timing spans from [`PerfSpan`](super::PerfSpan).
    pub const PERF: &str = "onevone::perf";
}

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `default_filter` is used
/// (for example `"info"` or `"onevone=debug"`). Calling this twice returns
/// [`LoggingError::AlreadyInitialized`], which callers may ignore.
pub fn init(default_filter: &str) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| LoggingError::InvalidFilter(e.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

/// A guard for timing a block of work.
///
/// Creates an `info`-level span under the `onevone::perf` target that stays
/// entered until the guard is dropped.
///
/// ```ignore
/// let _span = PerfSpan::new(span_names::DATASET_LOAD);
/// // ... work ...
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected() {
        // RUST_LOG would bypass the default filter.
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let result = init("onevone=loudest");
        assert!(matches!(result, Err(LoggingError::InvalidFilter(_))));
    }

    #[test]
    fn test_perf_span() {
        let span = PerfSpan::new("test_operation");
        let target = span.span.metadata().map(|meta| meta.target());
        assert_eq!(target, Some(targets::PERF));
    }
}
