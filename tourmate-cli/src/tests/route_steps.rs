//! Behaviour-driven step definitions driving the route CLI scenarios.

use super::helpers::{Workspace, complete_answers, write_json};
use super::*;
use crate::route::{RouteConfig, RouteProviderBuilder, run_route_with};
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use std::cell::RefCell;
use tourmate_core::test_support::StraightLineRouteProvider;
use tourmate_core::{RouteProvider, RouteRequestError};

#[derive(Debug)]
struct RouteWorld {
    _workspace: Workspace,
    answers_path: Utf8PathBuf,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RouteWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let answers_path = workspace.path("answers.json");
        Self {
            _workspace: workspace,
            answers_path,
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn write_answers_without(&self, key: &str) {
        let mut answers = complete_answers();
        if let Value::Object(map) = &mut answers {
            map.remove(key);
        }
        write_json(&self.answers_path, &answers);
    }

    fn expect_error(&self, check: impl FnOnce(&CliError)) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error);
    }

    fn report(&self) -> Value {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON route report")
    }
}

#[fixture]
fn world() -> RouteWorld {
    RouteWorld::new()
}

struct StraightLineBuilder;

impl RouteProviderBuilder for StraightLineBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn RouteProvider>, CliError> {
        assert_eq!(config.routing_app_key, "test-key");
        Ok(Box::new(StraightLineRouteProvider))
    }
}

#[given("complete wizard answers for routing exist on disk")]
fn routing_answers_exist(#[from(world)] world: &RouteWorld) {
    write_json(&world.answers_path, &complete_answers());
}

#[given("wizard answers without waypoints exist on disk")]
fn answers_without_waypoints(#[from(world)] world: &RouteWorld) {
    world.write_answers_without("waypoints");
}

#[given("wizard answers without a transport mode exist on disk")]
fn answers_without_transport(#[from(world)] world: &RouteWorld) {
    world.write_answers_without("transport");
}

#[when("I run the route command")]
fn run_route_command(#[from(world)] world: &RouteWorld) {
    let invocation = vec![
        "tourmate".to_owned(),
        "route".to_owned(),
        world.answers_path.as_str().to_owned(),
        format!("--{ARG_ROUTING_APP_KEY}"),
        "test-key".to_owned(),
    ];
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Route(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_route_with(args, &StraightLineBuilder, &mut *buffer)
        }
        other => panic!("expected route command, found {other:?}"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command prints a plan with {count} stops")]
fn prints_plan_with_stops(#[from(world)] world: &RouteWorld, count: usize) {
    let report = world.report();
    let stops = report["plan"]["stops"].as_array().expect("stops array");
    assert_eq!(stops.len(), count);
    assert_eq!(stops.first().map(|stop| &stop["kind"]), Some(&json!("start")));
    assert_eq!(stops.last().map(|stop| &stop["name"]), Some(&json!("Gyeongbokgung")));
}

#[then("the request travels by car")]
fn request_travels_by_car(#[from(world)] world: &RouteWorld) {
    let report = world.report();
    assert_eq!(report["request"]["mode"], json!("car"));
    assert_eq!(report["request"]["departure"], json!("2024-10-01"));
}

#[then("the command fails because the waypoints are missing")]
fn fails_missing_waypoints(#[from(world)] world: &RouteWorld) {
    world.expect_error(|error| match error {
        CliError::MissingWaypoints { path } => assert_eq!(*path, world.answers_path),
        other => panic!("expected MissingWaypoints, found {other:?}"),
    });
}

#[then("the command fails because the transport mode is missing")]
fn fails_missing_transport(#[from(world)] world: &RouteWorld) {
    world.expect_error(|error| match error {
        CliError::RouteRequest(RouteRequestError::MissingTransportMode) => {}
        other => panic!("expected MissingTransportMode, found {other:?}"),
    });
}

macro_rules! register_route_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/route_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RouteWorld) {
            let _ = world;
        }
    };
}

register_route_scenario!(route_happy_path, "routing through the recorded stops");
register_route_scenario!(route_missing_waypoints, "rejecting answers without waypoints");
register_route_scenario!(route_missing_transport, "rejecting answers without a transport mode");
