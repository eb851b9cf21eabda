//! Calendar date-range selection for short trips.
//!
//! A [`DateRangeSelector`] turns a sequence of single-day taps into a range
//! of at most [`MAX_TRIP_DAYS`] days. Picks are never rejected: an end date
//! beyond the limit is clamped, an end date before the anchor becomes the new
//! anchor, and a pick after a completed range starts over.
//!
//! # Examples
//! ```
//! use chrono::NaiveDate;
//! use tourmate_core::{DateRangeSelector, DateRangeState, PickOutcome};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 10, d).unwrap();
//! let mut selector = DateRangeSelector::new();
//! selector.pick(day(1));
//! let outcome = selector.pick(day(5));
//!
//! assert_eq!(outcome, PickOutcome::Clamped { requested: day(5) });
//! let range = selector.range().unwrap();
//! assert_eq!((range.start(), range.end()), (day(1), day(3)));
//! assert_eq!(range.day_count(), 3);
//! ```

use chrono::{Days, NaiveDate};
use log::debug;
use thiserror::Error;

/// Longest trip the planner accepts, counted in calendar days.
pub const MAX_TRIP_DAYS: u32 = 3;

/// Inclusive range of trip days.
///
/// Construction guarantees `start <= end` and a span of at most
/// [`MAX_TRIP_DAYS`] days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    day_count: u32,
}

/// Errors returned by [`DateRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateRangeError {
    /// The end date preceded the start date.
    #[error("trip end {end} precedes start {start}")]
    Inverted {
        /// Requested first day.
        start: NaiveDate,
        /// Requested last day.
        end: NaiveDate,
    },
    /// The range covered more days than a trip may last.
    #[error("trip from {start} to {end} exceeds {max} days", max = MAX_TRIP_DAYS)]
    TooLong {
        /// Requested first day.
        start: NaiveDate,
        /// Requested last day.
        end: NaiveDate,
    },
}

impl DateRange {
    /// Validates and constructs a [`DateRange`].
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::Inverted`] when `end < start` and
    /// [`DateRangeError::TooLong`] when the span exceeds [`MAX_TRIP_DAYS`].
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if end < start {
            return Err(DateRangeError::Inverted { start, end });
        }
        if end > latest_end(start) {
            return Err(DateRangeError::TooLong { start, end });
        }
        Ok(Self::from_ordered(start, end))
    }

    /// Build a range whose bounds are already ordered and within the limit.
    fn from_ordered(start: NaiveDate, end: NaiveDate) -> Self {
        let span = end.signed_duration_since(start).num_days();
        let day_count = u32::try_from(span).map_or(MAX_TRIP_DAYS, |days| days + 1);
        Self {
            start,
            end,
            day_count,
        }
    }

    /// First day of the trip.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the trip.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, including both ends.
    #[must_use]
    pub const fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// Iterate over every day of the range in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(|day| *day <= self.end)
    }
}

/// Last day a trip starting on `start` may end on.
///
/// Saturates at [`NaiveDate::MAX`] near the end of the calendar.
fn latest_end(start: NaiveDate) -> NaiveDate {
    start
        .checked_add_days(Days::new(u64::from(MAX_TRIP_DAYS - 1)))
        .unwrap_or(NaiveDate::MAX)
}

/// Progress of a date-range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRangeState {
    /// Nothing has been picked yet.
    #[default]
    Empty,
    /// Only the first day is known.
    StartOnly(NaiveDate),
    /// Both ends are known.
    Complete(DateRange),
}

/// How a pick changed the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// The pick began a new selection.
    Started,
    /// The pick preceded the anchor and replaced it.
    Reanchored,
    /// The pick completed the range as requested.
    Completed,
    /// The pick lay beyond the limit; the range ends on the last allowed day.
    Clamped {
        /// Date the user actually picked.
        requested: NaiveDate,
    },
}

/// Role of a day in the calendar highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayMark {
    /// The only selected day.
    Single,
    /// First day of a multi-day range.
    Start,
    /// A day strictly inside a range.
    Middle,
    /// Last day of a multi-day range.
    End,
}

/// State machine turning taps into a bounded [`DateRange`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeSelector {
    state: DateRangeState,
}

impl DateRangeSelector {
    /// Create an empty selector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection state.
    #[must_use]
    pub const fn state(&self) -> DateRangeState {
        self.state
    }

    /// Completed range, if both ends are known.
    #[must_use]
    pub const fn range(&self) -> Option<DateRange> {
        match self.state {
            DateRangeState::Complete(range) => Some(range),
            DateRangeState::Empty | DateRangeState::StartOnly(_) => None,
        }
    }

    /// Forget any picks.
    pub const fn clear(&mut self) {
        self.state = DateRangeState::Empty;
    }

    /// Feed a single tapped date into the selector.
    pub fn pick(&mut self, date: NaiveDate) -> PickOutcome {
        let (next, outcome) = match self.state {
            DateRangeState::Empty | DateRangeState::Complete(_) => {
                (DateRangeState::StartOnly(date), PickOutcome::Started)
            }
            DateRangeState::StartOnly(start) if date < start => {
                (DateRangeState::StartOnly(date), PickOutcome::Reanchored)
            }
            DateRangeState::StartOnly(start) => {
                let latest = latest_end(start);
                if date > latest {
                    (
                        DateRangeState::Complete(DateRange::from_ordered(start, latest)),
                        PickOutcome::Clamped { requested: date },
                    )
                } else {
                    (
                        DateRangeState::Complete(DateRange::from_ordered(start, date)),
                        PickOutcome::Completed,
                    )
                }
            }
        };
        debug!("date pick {date}: {:?} -> {next:?} ({outcome:?})", self.state);
        self.state = next;
        outcome
    }

    /// Highlight role of `date` in the current selection.
    #[must_use]
    pub fn mark(&self, date: NaiveDate) -> Option<DayMark> {
        match self.state {
            DateRangeState::Empty => None,
            DateRangeState::StartOnly(start) => (date == start).then_some(DayMark::Single),
            DateRangeState::Complete(range) => mark_in_range(&range, date),
        }
    }

    /// Every highlighted day with its role, in calendar order.
    #[must_use]
    pub fn marked_days(&self) -> Vec<(NaiveDate, DayMark)> {
        match self.state {
            DateRangeState::Empty => Vec::new(),
            DateRangeState::StartOnly(start) => vec![(start, DayMark::Single)],
            DateRangeState::Complete(range) => range
                .days()
                .filter_map(|day| mark_in_range(&range, day).map(|mark| (day, mark)))
                .collect(),
        }
    }
}

fn mark_in_range(range: &DateRange, date: NaiveDate) -> Option<DayMark> {
    if !range.contains(date) {
        return None;
    }
    let mark = if range.start() == range.end() {
        DayMark::Single
    } else if date == range.start() {
        DayMark::Start
    } else if date == range.end() {
        DayMark::End
    } else {
        DayMark::Middle
    };
    Some(mark)
}
