//! The in-progress trip configuration assembled by the planning wizard.
//!
//! [`TripSelection`] is a plain owned record. Each wizard step mutates one
//! facet of it and the route step reads the finished value. The store does no
//! validation of its own: date bounds are enforced by
//! [`DateRangeSelector`](crate::DateRangeSelector) before they get here.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use log::debug;

use crate::{Budget, CompanionId, DateRange, ThemeId, TransportMode};

/// Trip dates as stored in a selection.
///
/// Values written through [`TripSelection::apply_date_range`] satisfy
/// `day_count == (end - start) + 1`; [`TripSelection::set_date_range`]
/// stores whatever it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripDates {
    /// First day of the trip.
    pub start: NaiveDate,
    /// Last day of the trip.
    pub end: NaiveDate,
    /// Number of days covered.
    pub day_count: u32,
}

/// Selection facets the route step cannot do without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MissingField {
    /// No date range has been chosen.
    Dates,
    /// No transport mode has been chosen.
    TransportMode,
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Dates => "dates",
            Self::TransportMode => "transport mode",
        })
    }
}

/// A user's trip choices.
///
/// # Examples
/// ```
/// use tourmate_core::{ThemeId, TransportMode, TripSelection};
///
/// let mut selection = TripSelection::default();
/// assert!(selection.toggle_theme(ThemeId(4)));
/// selection.set_transport_mode(TransportMode::Car);
/// assert!(selection.themes().contains(&ThemeId(4)));
/// assert_eq!(selection.transport_mode(), Some(TransportMode::Car));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripSelection {
    themes: BTreeSet<ThemeId>,
    dates: Option<TripDates>,
    companions: BTreeSet<CompanionId>,
    budget: Option<Budget>,
    transport_mode: Option<TransportMode>,
}

impl TripSelection {
    /// Add `id` if absent, otherwise remove it.
    ///
    /// Returns `true` when the theme is selected afterwards.
    pub fn toggle_theme(&mut self, id: ThemeId) -> bool {
        let selected = toggle(&mut self.themes, id);
        debug!("{id} selected: {selected}");
        selected
    }

    /// Add `id` if absent, otherwise remove it.
    ///
    /// Returns `true` when the companion category is selected afterwards.
    pub fn toggle_companion(&mut self, id: CompanionId) -> bool {
        let selected = toggle(&mut self.companions, id);
        debug!("{id} selected: {selected}");
        selected
    }

    /// Overwrite the stored dates without validation.
    pub const fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate, day_count: u32) {
        self.dates = Some(TripDates {
            start,
            end,
            day_count,
        });
    }

    /// Store a validated range produced by the date selector.
    pub const fn apply_date_range(&mut self, range: &DateRange) {
        self.dates = Some(TripDates {
            start: range.start(),
            end: range.end(),
            day_count: range.day_count(),
        });
    }

    /// Forget the stored dates.
    pub const fn clear_dates(&mut self) {
        self.dates = None;
    }

    /// Overwrite the transport mode.
    pub const fn set_transport_mode(&mut self, mode: TransportMode) {
        self.transport_mode = Some(mode);
    }

    /// Overwrite the budget.
    pub const fn set_budget(&mut self, budget: Budget) {
        self.budget = Some(budget);
    }

    /// Return to the empty selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Selected themes in ascending id order.
    #[must_use]
    pub const fn themes(&self) -> &BTreeSet<ThemeId> {
        &self.themes
    }

    /// Stored trip dates.
    #[must_use]
    pub const fn dates(&self) -> Option<TripDates> {
        self.dates
    }

    /// Selected companion categories in ascending id order.
    #[must_use]
    pub const fn companions(&self) -> &BTreeSet<CompanionId> {
        &self.companions
    }

    /// Stored budget.
    #[must_use]
    pub const fn budget(&self) -> Option<Budget> {
        self.budget
    }

    /// Stored transport mode.
    #[must_use]
    pub const fn transport_mode(&self) -> Option<TransportMode> {
        self.transport_mode
    }

    /// Facets the route step needs that are still unset.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if self.dates.is_none() {
            missing.push(MissingField::Dates);
        }
        if self.transport_mode.is_none() {
            missing.push(MissingField::TransportMode);
        }
        missing
    }

    /// Whether the route step can run on this selection.
    #[must_use]
    pub fn is_ready_for_routing(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value)
    }
}
