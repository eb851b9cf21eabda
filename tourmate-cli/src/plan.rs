//! `plan` command: replay wizard answers and print the finished selection.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::answers::{PlanReport, load_answers, replay, require_file};
use crate::{ARG_ANSWERS, CliError, ENV_PLAN_ANSWERS, write_json};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Replay the answers recorded for each wizard screen (themes, \
                 calendar taps, companions, budget, transport) and print the \
                 resulting trip selection with its calendar highlight as JSON.",
    about = "Replay wizard answers and print the selection"
)]
#[ortho_config(prefix = "TOURMATE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file with the wizard answers.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) answers: Option<Utf8PathBuf>,
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) answers: Utf8PathBuf,
}

impl PlanArgs {
    fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let answers = args.answers.ok_or(CliError::MissingArgument {
            field: ARG_ANSWERS,
            env: ENV_PLAN_ANSWERS,
        })?;
        Ok(Self { answers })
    }
}

pub(crate) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_file(&config.answers, ARG_ANSWERS)?;
    let answers = load_answers(&config.answers)?;
    let session = replay(&answers)?;
    write_json(writer, &PlanReport::from_session(&session))
}
