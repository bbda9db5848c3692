//! Query URL construction for the archive's CGI endpoint.
//!
//! The archive rejects query strings whose fields are sorted alphabetically, so
//! the query is assembled by ordered concatenation rather than through a
//! key-sorting URL encoder.

use super::interval::SubInterval;

/// Default location of the archive's DST/AE query script.
pub const DEFAULT_BASE_URL: &str = "https://wdc.kugi.kyoto-u.ac.jp/cgi-bin/dstae-cgi";

/// Fixed output-format fields appended after the date fields.
const FORMAT_FIELDS: [&str; 6] = [
    "Image+Type=GIF",
    "COLOR=COLOR",
    "AE+Sensitivity=0",
    "Dst+Sensitivity=0",
    "Output=DST",
    "Out+format=WDC",
];

/// Archive endpoint that sub-intervals are encoded against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEndpoint {
    base_url: String,
}

impl ArchiveEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Build the query URL for one sub-interval.
    pub fn query_url(&self, interval: &SubInterval) -> String {
        format!("{}?{}", self.base_url, Self::query_string(interval))
    }

    fn query_string(interval: &SubInterval) -> String {
        let start = &interval.start;
        let end = &interval.end;
        let mut fields = vec![
            format!("SCent={}", start.code.century),
            format!("STens={}", start.code.tens),
            format!("SYear={}", start.code.unit),
            format!("SMonth={}", start.month_number()),
            format!("ECent={}", end.code.century),
            format!("ETens={}", end.code.tens),
            format!("EYear={}", end.code.unit),
            format!("EMonth={}", end.month_number()),
        ];
        fields.extend(FORMAT_FIELDS.iter().map(|f| f.to_string()));
        fields.join("&")
    }
}

impl Default for ArchiveEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
