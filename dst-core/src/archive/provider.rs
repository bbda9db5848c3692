//! HTTP collaborator trait, progress reporting, and structured error types.
//!
//! The HttpFetcher trait abstracts over the transport so the orchestrator can be
//! driven by reqwest in production and by an in-memory mock in tests.

use super::interval::SubInterval;
use super::range::RangeError;
use thiserror::Error;

/// Failures reported by an HTTP collaborator.
///
/// These are displayable in CLI context and pass through the orchestrator
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Errors returned by the fetch orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DstError {
    /// Rejected before any network call.
    #[error("invalid range: {0}")]
    InvalidRange(#[from] RangeError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Capability to GET a URL and return the whole response body.
///
/// Implementations release the underlying connection on every exit path.
/// Deadlines and status handling belong here, not in the orchestrator.
pub trait HttpFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

/// Progress callback for multi-interval fetches.
pub trait FetchProgress {
    /// Called before a sub-interval is requested.
    fn on_start(&self, interval: &SubInterval, index: usize, total: usize);

    /// Called after a sub-interval request returns.
    fn on_complete(
        &self,
        interval: &SubInterval,
        index: usize,
        total: usize,
        result: &Result<usize, TransportError>,
    );

    /// Called once every sub-interval has been fetched.
    fn on_batch_complete(&self, total: usize, bytes: usize);
}

/// Progress reporter that reports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl FetchProgress for SilentProgress {
    fn on_start(&self, _interval: &SubInterval, _index: usize, _total: usize) {}

    fn on_complete(
        &self,
        _interval: &SubInterval,
        _index: usize,
        _total: usize,
        _result: &Result<usize, TransportError>,
    ) {
    }

    fn on_batch_complete(&self, _total: usize, _bytes: usize) {}
}

/// Progress reporter that prints to stderr, leaving stdout for index data.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrProgress;

impl FetchProgress for StderrProgress {
    fn on_start(&self, interval: &SubInterval, index: usize, total: usize) {
        eprintln!(
            "[{}/{}] Fetching {}-{}...",
            index + 1,
            total,
            interval.start_year(),
            interval.end_year()
        );
    }

    fn on_complete(
        &self,
        interval: &SubInterval,
        _index: usize,
        _total: usize,
        result: &Result<usize, TransportError>,
    ) {
        let years = format!("{}-{}", interval.start_year(), interval.end_year());
        match result {
            Ok(bytes) => eprintln!("  OK: {years} ({bytes} bytes)"),
            Err(e) => eprintln!("  FAIL: {years}: {e}"),
        }
    }

    fn on_batch_complete(&self, total: usize, bytes: usize) {
        eprintln!("Download complete: {total} interval(s), {bytes} bytes");
    }
}
