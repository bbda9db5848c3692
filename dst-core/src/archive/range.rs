//! Requested year ranges, validated against the archive's coverage.

use chrono::Datelike;
use thiserror::Error;

/// First year of DST index records held by the archive.
pub const EARLIEST_YEAR: i32 = 1957;

/// Maximum number of years the archive serves in one query.
pub const DEFAULT_PERIOD: u32 = 25;

/// Source of the current calendar year.
///
/// Injected so validation is deterministic under test.
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Wall-clock year in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Clock pinned to a fixed year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// Reasons a requested range cannot be served.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("expected start year to be at least {}, got {start_year}", EARLIEST_YEAR)]
    StartBeforeRecords { start_year: i32 },

    #[error("expected end year to be at most {current_year}, got {end_year}")]
    EndInFuture { end_year: i32, current_year: i32 },

    #[error("start year {start_year} is after end year {end_year}")]
    Inverted { start_year: i32, end_year: i32 },
}

/// A validated, inclusive range of years the archive can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Validate `start..=end` against the archive's first year and the clock's
    /// current year.
    pub fn new(start: i32, end: i32, clock: &dyn Clock) -> Result<Self, RangeError> {
        if start < EARLIEST_YEAR {
            return Err(RangeError::StartBeforeRecords { start_year: start });
        }

        let current_year = clock.current_year();
        if end > current_year {
            return Err(RangeError::EndInFuture {
                end_year: end,
                current_year,
            });
        }

        if start > end {
            return Err(RangeError::Inverted {
                start_year: start,
                end_year: end,
            });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }
}
