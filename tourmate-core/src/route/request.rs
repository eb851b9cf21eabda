//! Route requests built from a finished selection.

use chrono::NaiveDate;
use geo::Coord;

use super::RouteRequestError;
use crate::{TransportMode, TripSelection};

/// Most intermediate stops a single request may carry.
pub const MAX_VIA_POINTS: usize = 30;

/// A named stop on the map.
///
/// `location.x` is the longitude and `location.y` the latitude, both WGS84.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Label shown on the marker.
    pub name: String,
    /// Geographic position.
    pub location: Coord<f64>,
}

impl Waypoint {
    /// Construct a waypoint from a name and `lon`/`lat` pair.
    #[must_use]
    pub fn new(name: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self {
            name: name.into(),
            location: Coord { x: lon, y: lat },
        }
    }
}

/// A request for an ordered route through a set of stops.
///
/// # Examples
/// ```
/// use tourmate_core::{RouteRequest, TransportMode, TripSelection, Waypoint};
///
/// let mut selection = TripSelection::default();
/// selection.set_transport_mode(TransportMode::Car);
///
/// let request = RouteRequest::from_selection(
///     &selection,
///     Waypoint::new("Seoul Station", 126.9707, 37.5547),
///     Waypoint::new("Gyeongbokgung", 126.9770, 37.5796),
///     vec![Waypoint::new("Namsan Tower", 126.9882, 37.5512)],
/// )?;
/// assert_eq!(request.mode, TransportMode::Car);
/// assert_eq!(request.waypoints().count(), 3);
/// # Ok::<(), tourmate_core::RouteRequestError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    /// Where the route begins.
    pub start: Waypoint,
    /// Where the route ends.
    pub end: Waypoint,
    /// Stops to visit in between.
    pub via: Vec<Waypoint>,
    /// How the traveller moves between stops.
    pub mode: TransportMode,
    /// First day of the trip, when the selection has dates.
    pub departure: Option<NaiveDate>,
}

impl RouteRequest {
    /// Build a request for the transport mode chosen in `selection`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteRequestError::MissingTransportMode`] when the selection
    /// has no transport mode and [`RouteRequestError::TooManyWaypoints`] when
    /// `via` exceeds [`MAX_VIA_POINTS`].
    pub fn from_selection(
        selection: &TripSelection,
        start: Waypoint,
        end: Waypoint,
        via: Vec<Waypoint>,
    ) -> Result<Self, RouteRequestError> {
        let mode = selection
            .transport_mode()
            .ok_or(RouteRequestError::MissingTransportMode)?;
        if via.len() > MAX_VIA_POINTS {
            return Err(RouteRequestError::TooManyWaypoints {
                count: via.len(),
                max: MAX_VIA_POINTS,
            });
        }
        Ok(Self {
            start,
            end,
            via,
            mode,
            departure: selection.dates().map(|dates| dates.start),
        })
    }

    /// Every stop in travel order: start, via points, end.
    pub fn waypoints(&self) -> impl Iterator<Item = &Waypoint> {
        std::iter::once(&self.start)
            .chain(self.via.iter())
            .chain(std::iter::once(&self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn car_selection() -> TripSelection {
        let mut selection = TripSelection::default();
        selection.set_transport_mode(TransportMode::Car);
        selection
    }

    fn stop(name: &str) -> Waypoint {
        Waypoint::new(name, 127.0, 37.5)
    }

    #[rstest]
    fn request_requires_transport_mode() {
        let err = RouteRequest::from_selection(
            &TripSelection::default(),
            stop("a"),
            stop("b"),
            Vec::new(),
        )
        .expect_err("missing mode");
        assert_eq!(err, RouteRequestError::MissingTransportMode);
    }

    #[rstest]
    fn request_limits_via_points(car_selection: TripSelection) {
        let via = (0..=MAX_VIA_POINTS).map(|i| stop(&i.to_string())).collect();
        let err = RouteRequest::from_selection(&car_selection, stop("a"), stop("b"), via)
            .expect_err("too many stops");
        assert_eq!(
            err,
            RouteRequestError::TooManyWaypoints {
                count: MAX_VIA_POINTS + 1,
                max: MAX_VIA_POINTS
            }
        );
    }

    #[rstest]
    fn waypoints_run_from_start_to_end(car_selection: TripSelection) {
        let request = RouteRequest::from_selection(
            &car_selection,
            stop("start"),
            stop("end"),
            vec![stop("one"), stop("two")],
        )
        .expect("valid request");
        let names: Vec<&str> = request.waypoints().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["start", "one", "two", "end"]);
        assert_eq!(request.departure, None);
    }

    #[rstest]
    fn departure_follows_first_trip_day(mut car_selection: TripSelection) {
        let start = NaiveDate::from_ymd_opt(2024, 5, 3).expect("valid date");
        let end = NaiveDate::from_ymd_opt(2024, 5, 4).expect("valid date");
        car_selection.set_date_range(start, end, 2);
        let request =
            RouteRequest::from_selection(&car_selection, stop("a"), stop("b"), Vec::new())
                .expect("valid request");
        assert_eq!(request.departure, Some(start));
    }
}
