//! HTTP-based `RouteProvider` using the T-Map sequential route service.
//!
//! # Example
//!
//! ```no_run
//! use tourmate_core::{RouteProvider, RouteRequest, TransportMode, TripSelection, Waypoint};
//! use tourmate_data::routing::HttpRouteProvider;
//!
//! let provider = HttpRouteProvider::new("https://apis.openapi.sk.com", "app-key")?;
//!
//! let mut selection = TripSelection::default();
//! selection.set_transport_mode(TransportMode::Car);
//! let request = RouteRequest::from_selection(
//!     &selection,
//!     Waypoint::new("Seoul Station", 126.9707, 37.5547),
//!     Waypoint::new("Gyeongbokgung", 126.9770, 37.5796),
//!     Vec::new(),
//! )?;
//!
//! let plan = provider.plan_route(&request)?;
//! println!("{} m", plan.total_distance_m);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use chrono::{Local, NaiveDate};
use geo::Coord;
use log::{debug, warn};
use tourmate_core::{
    RoutePlan, RouteProvider, RouteRequest, RouteStop, RoutingError, StopKind, TransportMode,
};

use super::tmap::{
    ErrorEnvelope, FeatureCollection, Geometry, SequentialRouteBody, clean_stop_name,
};
use crate::bridge::{
    Bridge, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, ProviderBuildError, RawResponse,
    TransportFailure,
};

/// Default base URL of the routing service.
pub const DEFAULT_ROUTING_BASE_URL: &str = "https://apis.openapi.sk.com";

/// Default `searchOption` sent for [`TransportMode::Car`].
pub const DEFAULT_CAR_SEARCH_OPTION: &str = "0";

/// Default `searchOption` sent for [`TransportMode::PublicTransit`].
pub const DEFAULT_TRANSIT_SEARCH_OPTION: &str = "10";

const ROUTE_PATH: &str = "/tmap/routes/routeSequential30";

/// Configuration for [`HttpRouteProvider`].
#[derive(Debug, Clone)]
pub struct HttpRouteProviderConfig {
    /// Base URL for the routing service.
    pub base_url: String,
    /// Application key sent in the `appKey` header.
    pub app_key: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// `searchOption` for car routes.
    pub car_search_option: String,
    /// `searchOption` for public-transit routes.
    pub transit_search_option: String,
}

impl Default for HttpRouteProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ROUTING_BASE_URL.to_owned(),
            app_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            car_search_option: DEFAULT_CAR_SEARCH_OPTION.to_owned(),
            transit_search_option: DEFAULT_TRANSIT_SEARCH_OPTION.to_owned(),
        }
    }
}

impl HttpRouteProviderConfig {
    /// Create a configuration for `base_url` authenticated with `app_key`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            app_key: app_key.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the `searchOption` sent for `mode`.
    #[must_use]
    pub fn with_search_option(mut self, mode: TransportMode, option: impl Into<String>) -> Self {
        match mode {
            TransportMode::Car => self.car_search_option = option.into(),
            TransportMode::PublicTransit => self.transit_search_option = option.into(),
        }
        self
    }

    fn search_option(&self, mode: TransportMode) -> &str {
        match mode {
            TransportMode::Car => &self.car_search_option,
            TransportMode::PublicTransit => &self.transit_search_option,
        }
    }
}

/// Route provider backed by the T-Map sequential route service.
///
/// Stops are visited in request order; the service does not reorder them.
#[derive(Debug)]
pub struct HttpRouteProvider {
    bridge: Bridge,
    config: HttpRouteProviderConfig,
}

impl HttpRouteProvider {
    /// Create a provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(
        base_url: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpRouteProviderConfig::new(base_url, app_key))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpRouteProviderConfig) -> Result<Self, ProviderBuildError> {
        let bridge = Bridge::new(&config.user_agent, config.timeout)?;
        Ok(Self { bridge, config })
    }

    /// The configuration this provider was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpRouteProviderConfig {
        &self.config
    }

    fn route_url(&self) -> String {
        format!(
            "{}{ROUTE_PATH}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn convert_failure(&self, failure: TransportFailure, url: &str) -> RoutingError {
        match failure {
            TransportFailure::Timeout => RoutingError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            },
            TransportFailure::Network(message) => RoutingError::NetworkError {
                url: url.to_owned(),
                message,
            },
        }
    }
}

/// `startTime` in `YYYYMMDDHHMM`: 09:00 on the departure day, else now.
fn start_time(departure: Option<NaiveDate>) -> String {
    departure.map_or_else(
        || Local::now().format("%Y%m%d%H%M").to_string(),
        |day| day.format("%Y%m%d0900").to_string(),
    )
}

/// Turn a raw service response into a plan or a routing error.
fn convert_response(
    response: &RawResponse,
    request: &RouteRequest,
    url: &str,
) -> Result<RoutePlan, RoutingError> {
    if !response.is_success() {
        return Err(convert_error_body(response, url));
    }
    let collection: FeatureCollection =
        serde_json::from_str(&response.body).map_err(|err| RoutingError::ParseError {
            message: err.to_string(),
        })?;
    convert_collection(collection, request)
}

fn convert_error_body(response: &RawResponse, url: &str) -> RoutingError {
    match serde_json::from_str::<ErrorEnvelope>(&response.body) {
        Ok(envelope) => RoutingError::ServiceError {
            code: envelope
                .error
                .code
                .unwrap_or_else(|| response.status.to_string()),
            message: envelope.error.message.unwrap_or_default(),
        },
        Err(_) => RoutingError::HttpError {
            url: url.to_owned(),
            status: response.status,
            message: response.body.trim().to_owned(),
        },
    }
}

fn stop_kind(point_type: &str) -> Option<StopKind> {
    match point_type {
        "S" => Some(StopKind::Start),
        "E" => Some(StopKind::End),
        other if other.starts_with('B') => Some(StopKind::Via),
        _ => None,
    }
}

fn convert_collection(
    collection: FeatureCollection,
    request: &RouteRequest,
) -> Result<RoutePlan, RoutingError> {
    let totals = collection
        .properties
        .ok_or_else(|| RoutingError::ParseError {
            message: "route response missing totals".to_owned(),
        })?;
    let total_distance_m = totals
        .total_distance
        .as_u64()
        .ok_or_else(|| RoutingError::ParseError {
            message: "route response has an invalid totalDistance".to_owned(),
        })?;
    let total_secs = totals
        .total_time
        .as_u64()
        .ok_or_else(|| RoutingError::ParseError {
            message: "route response has an invalid totalTime".to_owned(),
        })?;

    let requested: Vec<_> = request.waypoints().collect();
    let mut stops = Vec::new();
    let mut path: Vec<Coord<f64>> = Vec::new();
    for feature in collection.features {
        match feature.geometry {
            Geometry::Point { coordinates: [x, y] } => {
                let Some(kind) = feature.properties.point_type.as_deref().and_then(stop_kind)
                else {
                    continue;
                };
                let index = stops.len();
                let name = feature
                    .properties
                    .via_point_name
                    .as_deref()
                    .map(clean_stop_name)
                    .filter(|name| !name.is_empty())
                    .or_else(|| requested.get(index).map(|w| w.name.as_str()))
                    .unwrap_or_default()
                    .to_owned();
                stops.push(RouteStop {
                    index,
                    name,
                    location: Coord { x, y },
                    kind,
                });
            }
            Geometry::LineString { coordinates } => {
                for [x, y] in coordinates {
                    let coord = Coord { x, y };
                    if path.last() != Some(&coord) {
                        path.push(coord);
                    }
                }
            }
            Geometry::Other => {}
        }
    }

    if stops.len() != requested.len() {
        warn!(
            "route response lists {} stops for {} requested",
            stops.len(),
            requested.len()
        );
    }

    RoutePlan::new(
        stops,
        path,
        total_distance_m,
        Duration::from_secs(total_secs),
    )
    .map_err(|err| RoutingError::ParseError {
        message: err.to_string(),
    })
}

impl RouteProvider for HttpRouteProvider {
    /// Request a route through every stop of `request`, in order.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must be
    /// multi-threaded (`flavor = "multi_thread"`).
    fn plan_route(&self, request: &RouteRequest) -> Result<RoutePlan, RoutingError> {
        let url = self.route_url();
        let body = SequentialRouteBody::new(
            &request.start,
            &request.end,
            &request.via,
            start_time(request.departure),
            self.config.search_option(request.mode),
        );
        debug!(
            "requesting {} route through {} stops",
            request.mode,
            request.via.len() + 2
        );
        let http_request = self
            .bridge
            .client()
            .post(&url)
            .query(&[("version", "1")])
            .header("appKey", &self.config.app_key)
            .json(&body);
        let response = self
            .bridge
            .execute(http_request)
            .map_err(|failure| self.convert_failure(failure, &url))?;
        convert_response(&response, request, &url)
    }
}
