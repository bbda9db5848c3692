//! DST Core: access to the Kyoto WDC archive of Disturbance Storm Time index data.
//!
//! The archive only answers queries covering a bounded number of years, so this
//! crate contains:
//! - Year-range validation against the archive's coverage and an injectable clock
//! - Interval partitioning into period-sized sub-intervals with the archive's
//!   century/tens/unit date encoding
//! - Query URL construction in the archive's required field order
//! - A sequential fetch orchestrator over a pluggable HTTP collaborator
//! - TOML configuration for the endpoint, period, and HTTP client

pub mod archive;
pub mod config;

pub use archive::{
    partition, ArchiveDate, ArchiveEndpoint, Clock, DateCode, DstArchive, DstError,
    FetchProgress, FixedClock, HttpFetcher, RangeError, ReqwestFetcher, SilentProgress,
    StderrProgress, SubInterval, SystemClock, TransportError, YearRange, DEFAULT_PERIOD,
    EARLIEST_YEAR,
};
pub use config::{ConfigError, DstConfig};
