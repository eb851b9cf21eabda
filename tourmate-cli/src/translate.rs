//! `translate` command: localise text through the translation gateway.

use std::io::Write;

use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tourmate_core::{Language, TranslationGateway, Translator};
use tourmate_data::translation::{DEFAULT_TRANSLATION_BASE_URL, HttpTranslator};

use crate::{
    ARG_SOURCE, ARG_TARGET, ARG_TRANSLATION_BASE_URL, ARG_TRANSLATION_CLIENT_ID,
    ARG_TRANSLATION_CLIENT_SECRET, CliError, ENV_TARGET, ENV_TRANSLATION_CLIENT_ID,
    ENV_TRANSLATION_CLIENT_SECRET,
};

/// CLI arguments for the `translate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "translate",
    long_about = "Translate each argument from the source language (Korean \
                 unless --source is given) into the target language and \
                 print one line per argument. Repeated text is translated \
                 once.",
    about = "Translate text into another language"
)]
#[ortho_config(prefix = "TOURMATE")]
pub(crate) struct TranslateArgs {
    /// Text to translate; each value is translated separately.
    #[arg(value_name = "text")]
    #[serde(default)]
    pub(crate) texts: Vec<String>,
    /// Language to translate into (`ko`, `en`, `ja`, `zh-CN`, `zh-TW`).
    #[arg(long = ARG_TARGET, value_name = "lang")]
    #[serde(default)]
    pub(crate) target: Option<String>,
    /// Language of the input text; defaults to Korean.
    #[arg(long = ARG_SOURCE, value_name = "lang")]
    #[serde(default)]
    pub(crate) source: Option<String>,
    /// Base URL of the translation service.
    #[arg(long = ARG_TRANSLATION_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) translation_base_url: Option<String>,
    /// Client identifier for the translation service.
    #[arg(long = ARG_TRANSLATION_CLIENT_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) translation_client_id: Option<String>,
    /// Client secret for the translation service.
    #[arg(long = ARG_TRANSLATION_CLIENT_SECRET, value_name = "secret")]
    #[serde(default)]
    pub(crate) translation_client_secret: Option<String>,
}

/// Resolved `translate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TranslateConfig {
    pub(crate) texts: Vec<String>,
    pub(crate) source: Language,
    pub(crate) target: Language,
    pub(crate) translation_base_url: String,
    pub(crate) translation_client_id: String,
    pub(crate) translation_client_secret: String,
}

impl TranslateArgs {
    fn into_config(self) -> Result<TranslateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        TranslateConfig::try_from(merged)
    }
}

fn parse_language(value: &str, field: &'static str) -> Result<Language, CliError> {
    value.parse().map_err(|_| CliError::InvalidLanguage {
        field,
        value: value.to_owned(),
    })
}

impl TryFrom<TranslateArgs> for TranslateConfig {
    type Error = CliError;

    fn try_from(args: TranslateArgs) -> Result<Self, Self::Error> {
        if args.texts.is_empty() {
            return Err(CliError::NoText);
        }
        let target = args.target.as_deref().ok_or(CliError::MissingArgument {
            field: ARG_TARGET,
            env: ENV_TARGET,
        })?;
        let target = parse_language(target, ARG_TARGET)?;
        let source = args
            .source
            .as_deref()
            .map_or(Ok(Language::Korean), |source| {
                parse_language(source, ARG_SOURCE)
            })?;
        let translation_client_id = args.translation_client_id.ok_or(CliError::MissingArgument {
            field: ARG_TRANSLATION_CLIENT_ID,
            env: ENV_TRANSLATION_CLIENT_ID,
        })?;
        let translation_client_secret =
            args.translation_client_secret
                .ok_or(CliError::MissingArgument {
                    field: ARG_TRANSLATION_CLIENT_SECRET,
                    env: ENV_TRANSLATION_CLIENT_SECRET,
                })?;
        let translation_base_url = args
            .translation_base_url
            .unwrap_or_else(|| DEFAULT_TRANSLATION_BASE_URL.to_owned());
        Ok(Self {
            texts: args.texts,
            source,
            target,
            translation_base_url,
            translation_client_id,
            translation_client_secret,
        })
    }
}

/// Builds the translator for the current invocation.
pub(crate) trait TranslatorBuilder {
    fn build(&self, config: &TranslateConfig) -> Result<Box<dyn Translator>, CliError>;
}

pub(crate) struct HttpTranslatorBuilder;

impl TranslatorBuilder for HttpTranslatorBuilder {
    fn build(&self, config: &TranslateConfig) -> Result<Box<dyn Translator>, CliError> {
        let translator = HttpTranslator::new(
            config.translation_base_url.clone(),
            config.translation_client_id.clone(),
            config.translation_client_secret.clone(),
        )
        .map_err(|source| CliError::BuildProvider {
            base_url: config.translation_base_url.clone(),
            source,
        })?;
        Ok(Box::new(translator))
    }
}

pub(crate) fn run_translate(args: TranslateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_translate_with(args, &HttpTranslatorBuilder, writer)
}

pub(crate) fn run_translate_with(
    args: TranslateArgs,
    builder: &dyn TranslatorBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let gateway = TranslationGateway::new(builder.build(&config)?, config.source);
    if gateway.set_language(config.target) {
        debug!("translating from {} into {}", config.source, config.target);
    }
    for text in &config.texts {
        let translated = gateway.translate(text)?;
        writeln!(writer, "{translated}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
