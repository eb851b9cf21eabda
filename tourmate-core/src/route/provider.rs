//! Route provider trait.

use super::{RoutePlan, RouteRequest, RoutingError};

/// Plan an ordered route through the stops of a [`RouteRequest`].
///
/// Implementations return stops in visiting order, starting with
/// [`StopKind::Start`](super::StopKind::Start) and ending with
/// [`StopKind::End`](super::StopKind::End).
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use tourmate_core::{
///     RoutePlan, RouteProvider, RouteRequest, RouteStop, RoutingError, StopKind,
///     TransportMode, TripSelection, Waypoint,
/// };
///
/// struct DirectProvider;
///
/// impl RouteProvider for DirectProvider {
///     fn plan_route(&self, request: &RouteRequest) -> Result<RoutePlan, RoutingError> {
///         let stops = [(&request.start, StopKind::Start), (&request.end, StopKind::End)]
///             .into_iter()
///             .enumerate()
///             .map(|(index, (waypoint, kind))| RouteStop {
///                 index,
///                 name: waypoint.name.clone(),
///                 location: waypoint.location,
///                 kind,
///             })
///             .collect();
///         let path = vec![request.start.location, request.end.location];
///         RoutePlan::new(stops, path, 0, Duration::ZERO).map_err(|err| RoutingError::ParseError {
///             message: err.to_string(),
///         })
///     }
/// }
///
/// let mut selection = TripSelection::default();
/// selection.set_transport_mode(TransportMode::Car);
/// let request = RouteRequest::from_selection(
///     &selection,
///     Waypoint::new("a", 127.0, 37.5),
///     Waypoint::new("b", 127.1, 37.6),
///     Vec::new(),
/// )
/// .unwrap();
/// let plan = DirectProvider.plan_route(&request)?;
/// assert_eq!(plan.stops.len(), 2);
/// # Ok::<(), RoutingError>(())
/// ```
pub trait RouteProvider {
    /// Return a plan visiting every stop of `request`.
    fn plan_route(&self, request: &RouteRequest) -> Result<RoutePlan, RoutingError>;
}
