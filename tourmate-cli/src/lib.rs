//! Command-line interface for the TourMate trip planner.
//!
//! `plan` replays recorded wizard answers and prints the finished selection,
//! `route` additionally asks the routing service for a plan through the
//! recorded stops, and `translate` localises text through the translation
//! gateway. Service settings layer CLI flags over `TOURMATE_*` environment
//! variables and configuration files.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;

mod answers;
mod error;
mod fs;
mod logging;
mod plan;
mod route;
mod translate;

pub use error::CliError;

use plan::PlanArgs;
use route::RouteArgs;
use translate::TranslateArgs;

pub(crate) const ARG_ANSWERS: &str = "answers";
pub(crate) const ARG_ROUTING_BASE_URL: &str = "routing-base-url";
pub(crate) const ARG_ROUTING_APP_KEY: &str = "routing-app-key";
pub(crate) const ARG_TRANSLATION_BASE_URL: &str = "translation-base-url";
pub(crate) const ARG_TRANSLATION_CLIENT_ID: &str = "translation-client-id";
pub(crate) const ARG_TRANSLATION_CLIENT_SECRET: &str = "translation-client-secret";
pub(crate) const ARG_SOURCE: &str = "source";
pub(crate) const ARG_TARGET: &str = "target";
pub(crate) const ENV_PLAN_ANSWERS: &str = "TOURMATE_CMDS_PLAN_ANSWERS";
pub(crate) const ENV_ROUTE_ANSWERS: &str = "TOURMATE_CMDS_ROUTE_ANSWERS";
pub(crate) const ENV_ROUTING_APP_KEY: &str = "TOURMATE_CMDS_ROUTE_ROUTING_APP_KEY";
pub(crate) const ENV_TARGET: &str = "TOURMATE_CMDS_TRANSLATE_TARGET";
pub(crate) const ENV_TRANSLATION_CLIENT_ID: &str =
    "TOURMATE_CMDS_TRANSLATE_TRANSLATION_CLIENT_ID";
pub(crate) const ENV_TRANSLATION_CLIENT_SECRET: &str =
    "TOURMATE_CMDS_TRANSLATE_TRANSLATION_CLIENT_SECRET";

/// Run the TourMate CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] describing the first failure; argument errors
/// (including `--help`) arrive as [`CliError::ArgumentParsing`].
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init(cli.verbose);
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Plan(args) => plan::run_plan(args, &mut stdout),
        Command::Route(args) => route::run_route(args, &mut stdout),
        Command::Translate(args) => translate::run_translate(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tourmate",
    about = "Plan trips, request routes and translate text with the TourMate engine",
    version
)]
struct Cli {
    /// Raise log verbosity (`-v` info, `-vv` debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay wizard answers and print the finished selection.
    Plan(PlanArgs),
    /// Replay wizard answers and request a route through their stops.
    Route(RouteArgs),
    /// Translate text from the source language into a target language.
    Translate(TranslateArgs),
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json(writer: &mut dyn Write, value: &impl Serialize) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
