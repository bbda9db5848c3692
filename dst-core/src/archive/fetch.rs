//! Fetch orchestrator: validates a request, partitions it, and fetches each
//! sub-interval in order.

use super::interval::{partition, SubInterval};
use super::provider::{DstError, FetchProgress, HttpFetcher, SilentProgress};
use super::query::ArchiveEndpoint;
use super::range::{Clock, SystemClock, YearRange, DEFAULT_PERIOD, EARLIEST_YEAR};
use crate::config::DstConfig;

/// Sequential client for the DST archive.
///
/// The period is fixed at construction. Each call owns its own partition list
/// and output buffer.
pub struct DstArchive {
    fetcher: Box<dyn HttpFetcher>,
    clock: Box<dyn Clock>,
    endpoint: ArchiveEndpoint,
    period: u32,
}

impl DstArchive {
    /// Archive client with the default endpoint, a 25-year period, and the
    /// system clock.
    pub fn new(fetcher: impl HttpFetcher + 'static) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            clock: Box::new(SystemClock),
            endpoint: ArchiveEndpoint::default(),
            period: DEFAULT_PERIOD,
        }
    }

    /// Archive client using the endpoint and period from `config`.
    ///
    /// `config` is expected to have passed [`DstConfig::validate`].
    pub fn from_config(config: &DstConfig, fetcher: impl HttpFetcher + 'static) -> Self {
        Self {
            endpoint: ArchiveEndpoint::new(config.archive.base_url.clone()),
            period: config.archive.period,
            ..Self::new(fetcher)
        }
    }

    /// Replace the source of the current year.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    /// Current year according to the injected clock.
    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    /// Validate `start_year..=end_year` and return the sub-intervals that
    /// would be fetched.
    pub fn intervals(&self, start_year: i32, end_year: i32) -> Result<Vec<SubInterval>, DstError> {
        let range = YearRange::new(start_year, end_year, self.clock.as_ref())?;
        Ok(partition(range.start(), range.end(), self.period))
    }

    /// Validate a range and return the query URLs that would be fetched.
    pub fn query_urls(&self, start_year: i32, end_year: i32) -> Result<Vec<String>, DstError> {
        Ok(self
            .intervals(start_year, end_year)?
            .iter()
            .map(|interval| self.endpoint.query_url(interval))
            .collect())
    }

    /// Fetch DST index data from `start_year` through `end_year`, inclusive.
    ///
    /// Fails with [`DstError::InvalidRange`] before any request if the start
    /// precedes 1957, the end is beyond the current year, or the range is
    /// inverted. The first transport failure aborts the fetch and nothing
    /// fetched so far is returned.
    pub fn fetch_range(&self, start_year: i32, end_year: i32) -> Result<Vec<u8>, DstError> {
        self.fetch_range_with_progress(start_year, end_year, &SilentProgress)
    }

    /// [`fetch_range`](Self::fetch_range) with per-interval progress reporting.
    pub fn fetch_range_with_progress(
        &self,
        start_year: i32,
        end_year: i32,
        progress: &dyn FetchProgress,
    ) -> Result<Vec<u8>, DstError> {
        let intervals = self.intervals(start_year, end_year)?;
        let total = intervals.len();
        let mut data = Vec::new();

        for (i, interval) in intervals.iter().enumerate() {
            let url = self.endpoint.query_url(interval);
            tracing::debug!(
                start_year = interval.start_year(),
                end_year = interval.end_year(),
                url = %url,
                "fetching interval {}/{}",
                i + 1,
                total
            );
            progress.on_start(interval, i, total);

            let result = self.fetcher.fetch(&url);
            let outcome = result.as_ref().map(Vec::len).map_err(|e| e.clone());
            progress.on_complete(interval, i, total, &outcome);

            data.extend_from_slice(&result?);
        }

        progress.on_batch_complete(total, data.len());
        tracing::info!(
            start_year,
            end_year,
            intervals = total,
            bytes = data.len(),
            "fetched DST index data"
        );

        Ok(data)
    }

    /// Fetch everything from 1957 through the current year.
    pub fn fetch_all(&self) -> Result<Vec<u8>, DstError> {
        self.fetch_range(EARLIEST_YEAR, self.current_year())
    }

    /// [`fetch_all`](Self::fetch_all) with per-interval progress reporting.
    pub fn fetch_all_with_progress(
        &self,
        progress: &dyn FetchProgress,
    ) -> Result<Vec<u8>, DstError> {
        self.fetch_range_with_progress(EARLIEST_YEAR, self.current_year(), progress)
    }
}
