//! `route` command: replay wizard answers and request a route.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::warn;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tourmate_core::{RoutePlan, RouteProvider, RouteRequest, Waypoint};
use tourmate_data::routing::{DEFAULT_ROUTING_BASE_URL, HttpRouteProvider};

use crate::answers::{load_answers, replay, require_file};
use crate::{
    ARG_ANSWERS, ARG_ROUTING_APP_KEY, ARG_ROUTING_BASE_URL, CliError, ENV_ROUTE_ANSWERS,
    ENV_ROUTING_APP_KEY, write_json,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "route",
    long_about = "Replay the recorded wizard answers, then ask the routing \
                 service for a route from the recorded start through every \
                 via stop to the end, travelling by the chosen transport mode.",
    about = "Request a route for recorded wizard answers"
)]
#[ortho_config(prefix = "TOURMATE")]
pub(crate) struct RouteArgs {
    /// Path to a JSON file with the wizard answers and waypoints.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) answers: Option<Utf8PathBuf>,
    /// Base URL of the routing service.
    #[arg(long = ARG_ROUTING_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) routing_base_url: Option<String>,
    /// Application key for the routing service.
    #[arg(long = ARG_ROUTING_APP_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) routing_app_key: Option<String>,
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    pub(crate) answers: Utf8PathBuf,
    pub(crate) routing_base_url: String,
    pub(crate) routing_app_key: String,
}

impl RouteArgs {
    fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let answers = args.answers.ok_or(CliError::MissingArgument {
            field: ARG_ANSWERS,
            env: ENV_ROUTE_ANSWERS,
        })?;
        let routing_app_key = args.routing_app_key.ok_or(CliError::MissingArgument {
            field: ARG_ROUTING_APP_KEY,
            env: ENV_ROUTING_APP_KEY,
        })?;
        let routing_base_url = args
            .routing_base_url
            .unwrap_or_else(|| DEFAULT_ROUTING_BASE_URL.to_owned());
        Ok(Self {
            answers,
            routing_base_url,
            routing_app_key,
        })
    }
}

/// Builds the route provider for the current invocation.
pub(crate) trait RouteProviderBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn RouteProvider>, CliError>;
}

pub(crate) struct HttpRouteProviderBuilder;

impl RouteProviderBuilder for HttpRouteProviderBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn RouteProvider>, CliError> {
        let provider =
            HttpRouteProvider::new(config.routing_base_url.clone(), config.routing_app_key.clone())
                .map_err(|source| CliError::BuildProvider {
                    base_url: config.routing_base_url.clone(),
                    source,
                })?;
        Ok(Box::new(provider))
    }
}

/// What `route` prints: the request sent and the plan received.
#[derive(Debug, Serialize)]
pub(crate) struct RouteReport {
    pub(crate) request: RouteRequest,
    pub(crate) plan: RoutePlan,
}

pub(crate) fn run_route(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_route_with(args, &HttpRouteProviderBuilder, writer)
}

pub(crate) fn run_route_with(
    args: RouteArgs,
    builder: &dyn RouteProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let request = build_request(&config)?;
    let provider = builder.build(&config)?;
    let plan = provider.plan_route(&request)?;
    write_json(writer, &RouteReport { request, plan })
}

fn build_request(config: &RouteConfig) -> Result<RouteRequest, CliError> {
    require_file(&config.answers, ARG_ANSWERS)?;
    let answers = load_answers(&config.answers)?;
    let session = replay(&answers)?;
    let selection = session.finish();
    if !selection.is_ready_for_routing() {
        warn!(
            "selection is incomplete (missing {:?}); routing with what is set",
            selection.missing_fields()
        );
    }
    let waypoints = answers
        .waypoints
        .ok_or_else(|| CliError::MissingWaypoints {
            path: config.answers.clone(),
        })?;
    let via = waypoints.via.into_iter().map(Waypoint::from).collect();
    Ok(RouteRequest::from_selection(
        &selection,
        waypoints.start.into(),
        waypoints.end.into(),
        via,
    )?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
