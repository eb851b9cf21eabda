//! Facade crate for the TourMate trip planner.
//!
//! This crate re-exports the core domain types and, behind the `http`
//! feature, the HTTP adapters for the routing and translation services.

#![forbid(unsafe_code)]

pub use tourmate_core::{
    Budget, BudgetError, CompanionId, DateRange, DateRangeSelector, DayMark, Language,
    MAX_TRIP_DAYS, MissingField, PickOutcome, PlanningSession, RoutePlan, RouteProvider,
    RouteRequest, RouteRequestError, RoutingError, ThemeId, TranslationError, TranslationGateway,
    Translator, TransportMode, TripSelection, Waypoint, WizardStep,
};

#[cfg(feature = "http")]
pub use tourmate_data::{
    ProviderBuildError,
    routing::{HttpRouteProvider, HttpRouteProviderConfig},
    translation::{HttpTranslator, HttpTranslatorConfig},
};
