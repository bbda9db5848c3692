//! Property tests for interval partitioning.
//!
//! Uses proptest to verify:
//! 1. Date codes decode back to the year they were built from
//! 2. Sub-intervals cover the request exactly, in order, without gaps or overlaps
//! 3. No sub-interval spans more than the period
//! 4. Single-year requests yield exactly one sub-interval

use chrono::Month;
use dst_core::{partition, DateCode, EARLIEST_YEAR};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_year() -> impl Strategy<Value = i32> {
    EARLIEST_YEAR..=2200
}

fn arb_range() -> impl Strategy<Value = (i32, i32)> {
    (arb_year(), 0..=250_i32).prop_map(|(start, len)| (start, start + len))
}

fn arb_period() -> impl Strategy<Value = u32> {
    prop_oneof![Just(25_u32), 1..=60_u32]
}

// ── 1. Date code round trip ──────────────────────────────────────────

proptest! {
    #[test]
    fn date_code_decodes_to_year(year in arb_year()) {
        let code = DateCode::from_year(year);
        prop_assert_eq!(code.year(), year);
        prop_assert!((0..=9).contains(&code.unit));
        prop_assert!((0..=90).contains(&code.tens));
        prop_assert_eq!(code.tens % 10, 0);
    }
}

// ── 2. Exact coverage ────────────────────────────────────────────────

proptest! {
    #[test]
    fn intervals_cover_range_contiguously(
        (start, end) in arb_range(),
        period in arb_period(),
    ) {
        let intervals = partition(start, end, period);
        prop_assert!(!intervals.is_empty());
        prop_assert_eq!(intervals[0].start_year(), start);
        prop_assert_eq!(intervals.last().unwrap().end_year(), end);

        for pair in intervals.windows(2) {
            prop_assert_eq!(pair[1].start_year(), pair[0].end_year() + 1);
        }
        for interval in &intervals {
            prop_assert!(interval.start_year() <= interval.end_year());
            prop_assert_eq!(interval.start.month, Month::January);
            prop_assert_eq!(interval.end.month, Month::December);
        }
    }

    #[test]
    fn intervals_are_minimal_and_bounded(
        (start, end) in arb_range(),
        period in arb_period(),
    ) {
        let intervals = partition(start, end, period);
        let years = (end - start + 1) as usize;
        let period = period as usize;
        prop_assert_eq!(intervals.len(), years.div_ceil(period));

        for interval in &intervals {
            prop_assert!(interval.span() as usize <= period);
        }
        // Every interval but the last uses the full period.
        for interval in &intervals[..intervals.len() - 1] {
            prop_assert_eq!(interval.span() as usize, period);
        }
    }
}

proptest! {
    /// Ranges ending at the top of the year domain still terminate with full coverage.
    #[test]
    fn intervals_cover_range_at_domain_edge(
        len in 0..=300_i32,
        period in prop_oneof![arb_period(), Just(u32::MAX), Just(i32::MAX as u32 + 1)],
    ) {
        let start = i32::MAX - len;
        let intervals = partition(start, i32::MAX, period);
        prop_assert!(!intervals.is_empty());
        prop_assert_eq!(intervals[0].start_year(), start);
        prop_assert_eq!(intervals.last().unwrap().end_year(), i32::MAX);
        for pair in intervals.windows(2) {
            prop_assert_eq!(pair[1].start_year(), pair[0].end_year() + 1);
        }
        for interval in &intervals {
            prop_assert!(interval.start_year() <= interval.end_year());
        }
    }
}

// ── 3. Single-year requests ──────────────────────────────────────────

proptest! {
    #[test]
    fn single_year_yields_one_interval(year in arb_year(), period in arb_period()) {
        let intervals = partition(year, year, period);
        prop_assert_eq!(intervals.len(), 1);
        prop_assert_eq!(intervals[0].start_year(), year);
        prop_assert_eq!(intervals[0].end_year(), year);
    }
}

#[test]
fn archive_blocks_of_twenty_five_years() {
    let spans: Vec<(i32, i32)> = partition(1957, 2006, 25)
        .iter()
        .map(|i| (i.start_year(), i.end_year()))
        .collect();
    assert_eq!(spans, vec![(1957, 1981), (1982, 2006)]);
}
