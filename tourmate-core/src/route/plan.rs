//! Route plans: the markers and polyline drawn on the route screen.

use std::time::Duration;

use geo::{Coord, Rect};

use super::RoutePlanError;

/// Role of a stop within a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StopKind {
    /// First stop.
    Start,
    /// Intermediate stop.
    Via,
    /// Final stop.
    End,
}

/// A marker on the planned route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStop {
    /// Visiting order, starting at zero.
    pub index: usize,
    /// Label shown on the marker.
    pub name: String,
    /// Geographic position, `x` longitude and `y` latitude.
    pub location: Coord<f64>,
    /// Role of the stop.
    pub kind: StopKind,
}

/// An ordered route with its geometry and totals.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use tourmate_core::{RoutePlan, RouteStop, StopKind};
///
/// let stop = |index: usize, kind: StopKind, x: f64| RouteStop {
///     index,
///     name: format!("stop {index}"),
///     location: Coord { x, y: 37.5 },
///     kind,
/// };
/// let plan = RoutePlan::new(
///     vec![stop(0, StopKind::Start, 127.0), stop(1, StopKind::End, 127.1)],
///     vec![Coord { x: 127.0, y: 37.5 }, Coord { x: 127.1, y: 37.5 }],
///     8_850,
///     Duration::from_secs(900),
/// )?;
/// assert_eq!(plan.stops.len(), 2);
/// # Ok::<(), tourmate_core::RoutePlanError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    /// Stops in visiting order.
    pub stops: Vec<RouteStop>,
    /// Polyline connecting the stops.
    pub path: Vec<Coord<f64>>,
    /// Total travel distance in metres.
    pub total_distance_m: u64,
    /// Total travel time.
    pub total_time: Duration,
}

impl RoutePlan {
    /// Validates and constructs a [`RoutePlan`].
    ///
    /// # Errors
    ///
    /// Returns [`RoutePlanError::TooFewStops`] when fewer than two stops are
    /// supplied.
    pub fn new(
        stops: Vec<RouteStop>,
        path: Vec<Coord<f64>>,
        total_distance_m: u64,
        total_time: Duration,
    ) -> Result<Self, RoutePlanError> {
        if stops.len() < 2 {
            return Err(RoutePlanError::TooFewStops);
        }
        Ok(Self {
            stops,
            path,
            total_distance_m,
            total_time,
        })
    }

    /// Smallest rectangle enclosing every stop and path vertex.
    ///
    /// The route screen frames the map with it.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let mut points = self
            .stops
            .iter()
            .map(|stop| stop.location)
            .chain(self.path.iter().copied());
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Coord {
                    x: min.x.min(p.x),
                    y: min.y.min(p.y),
                },
                Coord {
                    x: max.x.max(p.x),
                    y: max.y.max(p.y),
                },
            )
        });
        Some(Rect::new(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn stop(index: usize, kind: StopKind, x: f64, y: f64) -> RouteStop {
        RouteStop {
            index,
            name: format!("stop {index}"),
            location: Coord { x, y },
            kind,
        }
    }

    #[rstest]
    fn plan_requires_two_stops() {
        let err = RoutePlan::new(
            vec![stop(0, StopKind::Start, 0.0, 0.0)],
            Vec::new(),
            0,
            Duration::ZERO,
        )
        .expect_err("one stop is not a route");
        assert_eq!(err, RoutePlanError::TooFewStops);
    }

    #[rstest]
    fn bounds_cover_stops_and_path() {
        let plan = RoutePlan::new(
            vec![
                stop(0, StopKind::Start, 127.0, 37.5),
                stop(1, StopKind::End, 127.2, 37.6),
            ],
            vec![Coord { x: 126.9, y: 37.7 }],
            100,
            Duration::from_secs(60),
        )
        .expect("valid plan");

        let bounds = plan.bounds().expect("non-empty plan");
        assert_eq!(bounds.min(), Coord { x: 126.9, y: 37.5 });
        assert_eq!(bounds.max(), Coord { x: 127.2, y: 37.7 });
    }
}
