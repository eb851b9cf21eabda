//! Property-based tests for the date-range selector.
//!
//! # Invariants tested
//!
//! - **First pick:** an empty selector always anchors on the picked day.
//! - **Within limit:** a later pick inside the window completes as picked.
//! - **Clamp:** a pick beyond the window ends the range on the last allowed day.
//! - **Reanchor:** an earlier pick replaces the anchor.
//! - **Restart:** any pick after a complete range starts over.
//! - **Totality:** arbitrary pick sequences always leave a valid state.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use tourmate_core::{DateRangeSelector, DateRangeState, MAX_TRIP_DAYS};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid base date")
}

fn offset(days: u64) -> NaiveDate {
    base()
        .checked_add_days(Days::new(days))
        .expect("offset stays within the calendar")
}

fn span_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn first_pick_anchors_start(d in 0_u64..5_000) {
        let mut selector = DateRangeSelector::new();
        selector.pick(offset(d));
        prop_assert_eq!(selector.state(), DateRangeState::StartOnly(offset(d)));
    }

    #[test]
    fn pick_within_window_completes_as_picked(s in 0_u64..5_000, extra in 0_u64..=2) {
        let mut selector = DateRangeSelector::new();
        selector.pick(offset(s));
        selector.pick(offset(s + extra));

        let range = selector.range().expect("range should be complete");
        prop_assert_eq!(range.start(), offset(s));
        prop_assert_eq!(range.end(), offset(s + extra));
        prop_assert_eq!(i64::from(range.day_count()), span_days(range.start(), range.end()) + 1);
        prop_assert!(range.day_count() <= MAX_TRIP_DAYS);
    }

    #[test]
    fn pick_beyond_window_is_clamped(s in 0_u64..5_000, extra in 3_u64..400) {
        let mut selector = DateRangeSelector::new();
        selector.pick(offset(s));
        selector.pick(offset(s + extra));

        let range = selector.range().expect("range should be complete");
        prop_assert_eq!(range.start(), offset(s));
        prop_assert_eq!(range.end(), offset(s + 2));
        prop_assert_eq!(range.day_count(), MAX_TRIP_DAYS);
    }

    #[test]
    fn earlier_pick_reanchors(s in 1_u64..5_000, back in 1_u64..400) {
        let earlier = s.saturating_sub(back);
        prop_assume!(earlier < s);
        let mut selector = DateRangeSelector::new();
        selector.pick(offset(s));
        selector.pick(offset(earlier));
        prop_assert_eq!(selector.state(), DateRangeState::StartOnly(offset(earlier)));
    }

    #[test]
    fn pick_after_complete_restarts(s in 0_u64..5_000, e in 0_u64..5_000, d in 0_u64..5_000) {
        let mut selector = DateRangeSelector::new();
        selector.pick(offset(s));
        selector.pick(offset(s + e.min(2)));
        prop_assert!(selector.range().is_some());

        selector.pick(offset(d));
        prop_assert_eq!(selector.state(), DateRangeState::StartOnly(offset(d)));
    }

    #[test]
    fn every_pick_sequence_yields_valid_state(picks in prop::collection::vec(0_u64..5_000, 0..20)) {
        let mut selector = DateRangeSelector::new();
        for pick in picks {
            selector.pick(offset(pick));
            if let Some(range) = selector.range() {
                prop_assert!(range.start() <= range.end());
                prop_assert!(range.day_count() >= 1);
                prop_assert!(range.day_count() <= MAX_TRIP_DAYS);
                prop_assert_eq!(
                    i64::from(range.day_count()),
                    span_days(range.start(), range.end()) + 1
                );
            }
        }
    }
}
