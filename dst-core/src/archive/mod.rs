//! Archive access: range validation, partitioning, query encoding, and fetching.

pub mod fetch;
pub mod http;
pub mod interval;
pub mod provider;
pub mod query;
pub mod range;

pub use fetch::DstArchive;
pub use http::ReqwestFetcher;
pub use interval::{partition, ArchiveDate, DateCode, SubInterval};
pub use provider::{
    DstError, FetchProgress, HttpFetcher, SilentProgress, StderrProgress, TransportError,
};
pub use query::ArchiveEndpoint;
pub use range::{Clock, FixedClock, RangeError, SystemClock, YearRange, DEFAULT_PERIOD, EARLIEST_YEAR};
