//! Planning sessions: one wizard run from theme choice to transport choice.
//!
//! A [`PlanningSession`] owns the [`TripSelection`] being built together with
//! the [`DateRangeSelector`] backing the calendar step. Starting a session
//! always starts from an empty selection, so choices from an earlier trip
//! never leak into a new one.

use chrono::NaiveDate;
use log::{debug, info};

use crate::{
    Budget, CompanionId, DateRangeSelector, PickOutcome, ThemeId, TransportMode, TripSelection,
};

/// Wizard steps in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    /// Choose place themes.
    #[default]
    Themes,
    /// Pick the trip dates.
    Dates,
    /// Choose who is travelling.
    Companions,
    /// Set the spending range.
    Budget,
    /// Choose how to get around.
    Transport,
}

impl WizardStep {
    /// Step following this one, or `None` after the last step.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Themes => Some(Self::Dates),
            Self::Dates => Some(Self::Companions),
            Self::Companions => Some(Self::Budget),
            Self::Budget => Some(Self::Transport),
            Self::Transport => None,
        }
    }
}

/// A single run through the planning wizard.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use tourmate_core::{PlanningSession, ThemeId, TransportMode};
///
/// let mut session = PlanningSession::begin();
/// session.toggle_theme(ThemeId(2));
/// session.pick_date(NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
/// session.pick_date(NaiveDate::from_ymd_opt(2024, 10, 2).unwrap());
/// session.set_transport_mode(TransportMode::PublicTransit);
///
/// let selection = session.finish();
/// assert_eq!(selection.dates().map(|d| d.day_count), Some(2));
/// assert!(selection.is_ready_for_routing());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlanningSession {
    selection: TripSelection,
    calendar: DateRangeSelector,
    step: WizardStep,
}

impl PlanningSession {
    /// Enter the wizard with an empty selection.
    #[must_use]
    pub fn begin() -> Self {
        info!("planning session started");
        Self::default()
    }

    /// Discard all choices and return to the first step.
    pub fn restart(&mut self) {
        info!("planning session restarted");
        self.selection.reset();
        self.calendar.clear();
        self.step = WizardStep::default();
    }

    /// Step currently presented.
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Move to the following step.
    ///
    /// Returns the new step, or `None` when already on the last one.
    pub fn advance(&mut self) -> Option<WizardStep> {
        let next = self.step.next()?;
        debug!("wizard step {:?} -> {next:?}", self.step);
        self.step = next;
        Some(next)
    }

    /// Toggle a theme; see [`TripSelection::toggle_theme`].
    pub fn toggle_theme(&mut self, id: ThemeId) -> bool {
        self.selection.toggle_theme(id)
    }

    /// Feed a calendar tap into the date selector.
    ///
    /// A completed range is written to the selection; a pick that restarts
    /// the range clears the stored dates until the range completes again.
    pub fn pick_date(&mut self, date: NaiveDate) -> PickOutcome {
        let outcome = self.calendar.pick(date);
        match self.calendar.range() {
            Some(range) => self.selection.apply_date_range(&range),
            None => self.selection.clear_dates(),
        }
        outcome
    }

    /// Toggle a companion category; see [`TripSelection::toggle_companion`].
    pub fn toggle_companion(&mut self, id: CompanionId) -> bool {
        self.selection.toggle_companion(id)
    }

    /// Record the spending range.
    pub fn set_budget(&mut self, budget: Budget) {
        self.selection.set_budget(budget);
    }

    /// Record the transport mode.
    pub fn set_transport_mode(&mut self, mode: TransportMode) {
        self.selection.set_transport_mode(mode);
    }

    /// Selection built so far.
    #[must_use]
    pub const fn selection(&self) -> &TripSelection {
        &self.selection
    }

    /// Calendar selector backing the dates step.
    #[must_use]
    pub const fn calendar(&self) -> &DateRangeSelector {
        &self.calendar
    }

    /// Hand the finished selection to the route step.
    #[must_use]
    pub fn finish(&self) -> TripSelection {
        info!(
            "planning session finished ({} themes, {} companions)",
            self.selection.themes().len(),
            self.selection.companions().len()
        );
        self.selection.clone()
    }
}
