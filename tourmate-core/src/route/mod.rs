//! Route requests and the plans returned for them.
//!
//! The final wizard step turns a finished [`TripSelection`](crate::TripSelection)
//! and the chosen stops into a [`RouteRequest`]. A [`RouteProvider`] answers it
//! with a [`RoutePlan`]: ordered markers plus the polyline to draw between them.

mod error;
mod plan;
mod provider;
mod request;

pub use error::{RoutePlanError, RouteRequestError, RoutingError};
pub use plan::{RoutePlan, RouteStop, StopKind};
pub use provider::RouteProvider;
pub use request::{MAX_VIA_POINTS, RouteRequest, Waypoint};
