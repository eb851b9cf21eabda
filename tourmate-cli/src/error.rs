//! Error types emitted by the TourMate CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tourmate_core::{BudgetError, RouteRequestError, RoutingError, TranslationError};
use tourmate_data::ProviderBuildError;

/// Errors emitted by the TourMate CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A language option did not name a supported language.
    #[error("{field} {value:?} is not a supported language")]
    InvalidLanguage {
        /// Name of the offending option.
        field: &'static str,
        /// Value as given.
        value: String,
    },
    /// The translate command received no text.
    #[error("nothing to translate")]
    NoText,
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Name of the option holding the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// Opening the answers file failed.
    #[error("failed to open answers at {path:?}: {source}")]
    OpenAnswers {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The answers JSON could not be decoded.
    #[error("failed to parse answers JSON at {path:?}: {source}")]
    ParseAnswers {
        /// Path of the answers file.
        path: Utf8PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// The answers carry an invalid budget.
    #[error("answers contain an invalid budget: {0}")]
    InvalidBudget(#[from] BudgetError),
    /// The answers lack the waypoints the route command needs.
    #[error("answers at {path:?} have no waypoints")]
    MissingWaypoints {
        /// Path of the answers file.
        path: Utf8PathBuf,
    },
    /// The finished selection cannot parameterise a route.
    #[error("cannot build route request: {0}")]
    RouteRequest(#[from] RouteRequestError),
    /// Constructing an HTTP adapter failed.
    #[error("failed to build client for {base_url:?}: {source}")]
    BuildProvider {
        /// Base URL the adapter was configured with.
        base_url: String,
        /// Underlying construction error.
        #[source]
        source: ProviderBuildError,
    },
    /// The routing service failed.
    #[error("routing failed: {0}")]
    Routing(#[from] RoutingError),
    /// The translation service failed.
    #[error("translation failed: {0}")]
    Translation(#[from] TranslationError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
