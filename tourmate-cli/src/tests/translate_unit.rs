//! Unit tests for the `translate` command.

use super::*;
use crate::translate::{TranslateArgs, TranslateConfig, TranslatorBuilder, run_translate_with};
use rstest::rstest;
use std::sync::Arc;
use tourmate_core::test_support::RecordingTranslator;
use tourmate_core::{Language, TranslationError, Translator};

/// Shares one recording backend between the builder and the assertions.
struct SharedTranslator(Arc<RecordingTranslator>);

impl Translator for SharedTranslator {
    fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslationError> {
        self.0.translate(text, from, to)
    }
}

struct StubTranslatorBuilder {
    backend: Arc<RecordingTranslator>,
}

impl TranslatorBuilder for StubTranslatorBuilder {
    fn build(&self, _config: &TranslateConfig) -> Result<Box<dyn Translator>, CliError> {
        Ok(Box::new(SharedTranslator(Arc::clone(&self.backend))))
    }
}

fn args(texts: &[&str]) -> TranslateArgs {
    TranslateArgs {
        texts: texts.iter().map(|text| (*text).to_owned()).collect(),
        target: Some("ja".to_owned()),
        source: Some("ko".to_owned()),
        translation_base_url: Some("http://translator.invalid".to_owned()),
        translation_client_id: Some("id".to_owned()),
        translation_client_secret: Some("secret".to_owned()),
    }
}

#[rstest]
fn translate_prints_one_line_per_text_and_reuses_cache() {
    let backend = Arc::new(RecordingTranslator::default());
    let builder = StubTranslatorBuilder {
        backend: Arc::clone(&backend),
    };
    let mut stdout = Vec::new();

    run_translate_with(args(&["지도", "일정", "지도"]), &builder, &mut stdout)
        .expect("translate should succeed");

    let output = String::from_utf8(stdout).expect("stdout utf-8");
    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        vec!["[ja] 지도", "[ja] 일정", "[ja] 지도"]
    );
    assert_eq!(backend.calls(), 2);
}

#[rstest]
fn translate_stops_at_the_first_failure() {
    let backend = Arc::new(RecordingTranslator::failing());
    let builder = StubTranslatorBuilder {
        backend: Arc::clone(&backend),
    };
    let mut stdout = Vec::new();

    let err = run_translate_with(args(&["지도", "일정"]), &builder, &mut stdout)
        .expect_err("failing backend should surface");

    match err {
        CliError::Translation(TranslationError::NetworkError { .. }) => {}
        other => panic!("expected Translation error, found {other:?}"),
    }
    assert!(stdout.is_empty());
    assert_eq!(backend.calls(), 1);
}
