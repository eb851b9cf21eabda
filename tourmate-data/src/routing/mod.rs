//! HTTP route provider for the T-Map sequential route service.
//!
//! [`HttpRouteProvider`] implements [`tourmate_core::RouteProvider`] by posting
//! the request's stops to the service and reading back the ordered stops, the
//! path polyline and the totals.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use tourmate_core::TransportMode;
//! use tourmate_data::routing::{HttpRouteProvider, HttpRouteProviderConfig};
//!
//! let config = HttpRouteProviderConfig::new("https://apis.openapi.sk.com", "app-key")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_search_option(TransportMode::Car, "2");
//! let provider = HttpRouteProvider::with_config(config)?;
//! # Ok::<(), tourmate_data::ProviderBuildError>(())
//! ```

mod provider;
mod tmap;

pub use provider::{
    DEFAULT_CAR_SEARCH_OPTION, DEFAULT_ROUTING_BASE_URL, DEFAULT_TRANSIT_SEARCH_OPTION,
    HttpRouteProvider, HttpRouteProviderConfig,
};
