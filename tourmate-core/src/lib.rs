//! Core domain types for the TourMate trip planner.
//!
//! The planning wizard accumulates a [`TripSelection`] step by step inside a
//! [`PlanningSession`]. Calendar taps go through a [`DateRangeSelector`],
//! which never rejects input but bounds trips to [`MAX_TRIP_DAYS`]. The
//! finished selection parameterises a [`RouteRequest`] answered by a
//! [`RouteProvider`]. Interface text is localised through one
//! [`TranslationGateway`].
//!
//! External services sit behind the [`Translator`] and [`RouteProvider`]
//! traits; HTTP implementations live in `tourmate-data`.

#![forbid(unsafe_code)]

pub mod catalogue;
pub mod date_range;
pub mod route;
pub mod selection;
pub mod session;
pub mod translation;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalogue::{Budget, BudgetError, CompanionId, ThemeId, TransportMode};
pub use date_range::{
    DateRange, DateRangeError, DateRangeSelector, DateRangeState, DayMark, MAX_TRIP_DAYS,
    PickOutcome,
};
pub use route::{
    MAX_VIA_POINTS, RoutePlan, RoutePlanError, RouteProvider, RouteRequest, RouteRequestError,
    RouteStop, RoutingError, StopKind, Waypoint,
};
pub use selection::{MissingField, TripDates, TripSelection};
pub use session::{PlanningSession, WizardStep};
pub use translation::{Language, TranslationError, TranslationGateway, Translator};
