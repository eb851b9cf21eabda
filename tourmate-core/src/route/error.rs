use thiserror::Error;

/// Errors returned by [`crate::route::RouteRequest::from_selection`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteRequestError {
    /// The selection has no transport mode yet.
    #[error("choose a transport mode before requesting a route")]
    MissingTransportMode,
    /// More intermediate stops were supplied than the routing service takes.
    #[error("{count} via points requested; at most {max} are supported")]
    TooManyWaypoints {
        /// Number of via points supplied.
        count: usize,
        /// Maximum accepted.
        max: usize,
    },
}

/// Errors returned by [`crate::route::RoutePlan::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutePlanError {
    /// A plan needs at least a start and an end stop.
    #[error("route plan must contain at least two stops")]
    TooFewStops,
}

/// Errors from [`crate::route::RouteProvider::plan_route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// A network error occurred while contacting the routing service.
    #[error("network error contacting {url}: {message}")]
    NetworkError {
        /// URL that was being requested.
        url: String,
        /// Human-readable error description.
        message: String,
    },

    /// The routing request timed out.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// URL that was being requested.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },

    /// The routing service returned an HTTP error status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpError {
        /// URL that was being requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error message from the response or status text.
        message: String,
    },

    /// The routing service reported a failure in its response body.
    #[error("routing service error ({code}): {message}")]
    ServiceError {
        /// Error code reported by the service.
        code: String,
        /// Error message reported by the service.
        message: String,
    },

    /// The response could not be parsed or described an unusable route.
    #[error("failed to parse routing response: {message}")]
    ParseError {
        /// Description of the parsing failure.
        message: String,
    },
}
