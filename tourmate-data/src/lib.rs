//! HTTP adapters for the TourMate engine.
//!
//! Responsibilities:
//! - Implement the `tourmate-core` service traits against the external APIs:
//!   [`routing::HttpRouteProvider`] and [`translation::HttpTranslator`].
//! - Own the wire formats of those services.
//!
//! Boundaries:
//! - Do not encode domain rules (live in `tourmate-core`).
//! - Keep blocking I/O off async executors; the adapters block only through
//!   `block_in_place` or their own runtime.
//!
//! Invariants:
//! - Adapters are `Send + Sync` and hold no global mutable state.

#![forbid(unsafe_code)]

mod bridge;
pub mod routing;
pub mod translation;

pub use bridge::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, ProviderBuildError};
