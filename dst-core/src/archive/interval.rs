//! Interval partitioning and the archive's date encoding.
//!
//! The archive caps a single query at `period` years and addresses years as a
//! century/tens/unit triple. A request of arbitrary length is split into
//! contiguous, non-overlapping sub-intervals, each running from January of its
//! first year to December of its last.

use chrono::Month;

/// A year split into the archive's `century * 100 + tens + unit` form.
///
/// `tens` is a multiple of 10 in `[0, 90]` and `unit` is in `[0, 9]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateCode {
    pub century: i32,
    pub tens: i32,
    pub unit: i32,
}

impl DateCode {
    /// Encode a calendar year (2013 => century 20, tens 10, unit 3).
    pub fn from_year(year: i32) -> Self {
        let unit = year.rem_euclid(10);
        let tens = (year - unit).rem_euclid(100);
        let century = (year - unit - tens) / 100;
        Self {
            century,
            tens,
            unit,
        }
    }

    /// Decode back to the calendar year.
    pub fn year(&self) -> i32 {
        self.century * 100 + self.tens + self.unit
    }
}

/// One endpoint of an archive query: a date code plus a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArchiveDate {
    pub code: DateCode,
    pub month: Month,
}

impl ArchiveDate {
    pub fn new(year: i32, month: Month) -> Self {
        Self {
            code: DateCode::from_year(year),
            month,
        }
    }

    pub fn year(&self) -> i32 {
        self.code.year()
    }

    /// Month number as the archive expects it (1-12).
    pub fn month_number(&self) -> u32 {
        self.month.number_from_month()
    }
}

/// A single bounded archive query, January of the first year through December
/// of the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubInterval {
    pub start: ArchiveDate,
    pub end: ArchiveDate,
}

impl SubInterval {
    /// Whole-year sub-interval covering `first_year..=last_year`.
    pub fn new(first_year: i32, last_year: i32) -> Self {
        Self {
            start: ArchiveDate::new(first_year, Month::January),
            end: ArchiveDate::new(last_year, Month::December),
        }
    }

    pub fn start_year(&self) -> i32 {
        self.start.year()
    }

    pub fn end_year(&self) -> i32 {
        self.end.year()
    }

    /// Number of calendar years covered (inclusive).
    pub fn span(&self) -> i32 {
        self.end_year() - self.start_year() + 1
    }
}

/// Split `start_year..=end_year` into sub-intervals of at most `period` years.
///
/// A full-period step starting at `cursor` ends at `cursor + period - 1` so the
/// next step can start at `cursor + period`. The final step is clamped to
/// `end_year` and keeps it inclusive. The result covers the whole range, in
/// order, with no gaps or overlaps. A single-year request yields exactly one
/// sub-interval.
///
/// Range bounds are not checked against the archive's coverage here; see
/// [`YearRange`](super::range::YearRange). A zero period or an inverted range
/// yields an empty list.
pub fn partition(start_year: i32, end_year: i32, period: u32) -> Vec<SubInterval> {
    if period == 0 || start_year > end_year {
        return Vec::new();
    }

    let step = i32::try_from(period).unwrap_or(i32::MAX);
    let years = i64::from(end_year) - i64::from(start_year) + 1;
    let count = (years + i64::from(step) - 1) / i64::from(step);
    let mut intervals = Vec::with_capacity(usize::try_from(count).unwrap_or(0));

    let mut cursor = start_year;
    loop {
        // Full step ends at cursor + period - 1; overflow or overshoot clamps to end_year
        let last_year = cursor
            .checked_add(step - 1)
            .map_or(end_year, |last| last.min(end_year));

        intervals.push(SubInterval::new(cursor, last_year));

        if last_year == end_year {
            break;
        }
        cursor = last_year + 1;
    }

    intervals
}
