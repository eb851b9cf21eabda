//! Wizard answer files and their replay into a planning session.
//!
//! An answers file records what a traveller chose on each wizard screen, in
//! the order the screens appear. Replaying it drives a fresh
//! [`PlanningSession`] exactly as the screens would, including toggle and
//! calendar semantics, so a repeated theme deselects it and a third date pick
//! starts a new range.

use std::io::BufReader;

use camino::Utf8Path;
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use tourmate_core::{
    Budget, CompanionId, DayMark, MissingField, PickOutcome, PlanningSession, ThemeId,
    TransportMode, TripSelection, Waypoint,
};

use crate::{
    CliError,
    fs::{file_is_file, open_utf8_file},
};

/// Choices made on each wizard screen.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub(crate) struct Answers {
    /// Theme toggles, in tap order.
    #[serde(default)]
    pub(crate) themes: Vec<ThemeId>,
    /// Calendar taps, in tap order.
    #[serde(default)]
    pub(crate) picks: Vec<NaiveDate>,
    /// Companion toggles, in tap order.
    #[serde(default)]
    pub(crate) companions: Vec<CompanionId>,
    #[serde(default)]
    pub(crate) budget: Option<BudgetAnswer>,
    #[serde(default)]
    pub(crate) transport: Option<TransportMode>,
    /// Stops for the route step; ignored by `plan`.
    #[serde(default)]
    pub(crate) waypoints: Option<WaypointAnswers>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub(crate) struct BudgetAnswer {
    pub(crate) min_krw: u32,
    pub(crate) max_krw: u32,
}

/// A stop as written in the answers file: `x` is longitude, `y` latitude.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct WaypointAnswer {
    pub(crate) name: String,
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl From<WaypointAnswer> for Waypoint {
    fn from(answer: WaypointAnswer) -> Self {
        Self::new(answer.name, answer.x, answer.y)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct WaypointAnswers {
    pub(crate) start: WaypointAnswer,
    pub(crate) end: WaypointAnswer,
    #[serde(default)]
    pub(crate) via: Vec<WaypointAnswer>,
}

/// Check that the answers file named by option `field` is a regular file.
pub(crate) fn require_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::OpenAnswers {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads a JSON-encoded [`Answers`] file from disk.
pub(crate) fn load_answers(path: &Utf8Path) -> Result<Answers, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenAnswers {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseAnswers {
        path: path.to_path_buf(),
        source,
    })
}

/// Drive a fresh session through every wizard step with `answers`.
///
/// # Errors
///
/// Returns [`CliError::InvalidBudget`] when the budget bounds are inverted.
pub(crate) fn replay(answers: &Answers) -> Result<PlanningSession, CliError> {
    let mut session = PlanningSession::begin();

    for theme in &answers.themes {
        session.toggle_theme(*theme);
    }
    session.advance();

    for pick in &answers.picks {
        if let PickOutcome::Clamped { requested } = session.pick_date(*pick) {
            info!("end date {requested} exceeds the trip limit; range was clamped");
        }
    }
    session.advance();

    for companion in &answers.companions {
        session.toggle_companion(*companion);
    }
    session.advance();

    if let Some(budget) = answers.budget {
        session.set_budget(Budget::new(budget.min_krw, budget.max_krw)?);
    }
    session.advance();

    if let Some(mode) = answers.transport {
        session.set_transport_mode(mode);
    }
    Ok(session)
}

/// A highlighted calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct MarkedDay {
    pub(crate) date: NaiveDate,
    pub(crate) mark: DayMark,
}

/// What `plan` prints: the finished selection and how the calendar shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PlanReport {
    pub(crate) selection: TripSelection,
    pub(crate) calendar: Vec<MarkedDay>,
    pub(crate) ready_for_routing: bool,
    pub(crate) missing: Vec<MissingField>,
}

impl PlanReport {
    pub(crate) fn from_session(session: &PlanningSession) -> Self {
        let selection = session.finish();
        let calendar = session
            .calendar()
            .marked_days()
            .into_iter()
            .map(|(date, mark)| MarkedDay { date, mark })
            .collect();
        Self {
            ready_for_routing: selection.is_ready_for_routing(),
            missing: selection.missing_fields(),
            selection,
            calendar,
        }
    }
}
