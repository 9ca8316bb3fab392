//! Error type for the scan service

use thiserror::Error;

/// The only error that crosses the scan service boundary
///
/// Transport and parse failures never surface here; they resolve to a
/// fallback verdict with an outcome tag instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    #[error("Scan content is empty")]
    EmptyContent,
}
