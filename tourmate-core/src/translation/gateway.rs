//! Memoising front for a translation backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};

use super::{Language, TranslationError};

/// Machine-translation backend.
///
/// # Examples
///
/// ```rust
/// use tourmate_core::{Language, TranslationError, Translator};
///
/// struct Shouting;
///
/// impl Translator for Shouting {
///     fn translate(
///         &self,
///         text: &str,
///         _from: Language,
///         _to: Language,
///     ) -> Result<String, TranslationError> {
///         if text.is_empty() {
///             return Err(TranslationError::EmptyText);
///         }
///         Ok(text.to_uppercase())
///     }
/// }
///
/// let out = Shouting.translate("hello", Language::Korean, Language::English)?;
/// assert_eq!(out, "HELLO");
/// # Ok::<(), TranslationError>(())
/// ```
pub trait Translator {
    /// Translate `text` from `from` into `to`.
    ///
    /// Implementations must return `Err(TranslationError::EmptyText)` when
    /// `text` is empty.
    fn translate(&self, text: &str, from: Language, to: Language)
    -> Result<String, TranslationError>;
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslationError> {
        (**self).translate(text, from, to)
    }
}

#[derive(Debug)]
struct GatewayState {
    target: Language,
    cache: HashMap<(String, Language), String>,
}

/// Single entry point for interface translation.
///
/// Results are cached per `(text, target language)`. Switching the target
/// language with [`TranslationGateway::set_language`] clears the cache.
/// Failed lookups are not cached, so the next call retries the backend.
///
/// The backend is never called while the cache lock is held.
///
/// # Examples
///
/// ```rust
/// use tourmate_core::{Language, TranslationError, TranslationGateway, Translator};
///
/// struct Echo;
///
/// impl Translator for Echo {
///     fn translate(&self, text: &str, _: Language, to: Language) -> Result<String, TranslationError> {
///         Ok(format!("[{to}] {text}"))
///     }
/// }
///
/// let gateway = TranslationGateway::new(Echo, Language::Korean);
/// assert_eq!(gateway.translate("지도")?, "지도");
///
/// assert!(gateway.set_language(Language::English));
/// assert_eq!(gateway.translate("지도")?, "[en] 지도");
/// assert_eq!(gateway.cached_len(), 1);
/// # Ok::<(), TranslationError>(())
/// ```
#[derive(Debug)]
pub struct TranslationGateway<T> {
    translator: T,
    source: Language,
    state: Mutex<GatewayState>,
}

impl<T: Translator> TranslationGateway<T> {
    /// Wrap `translator`, treating `source` as the language content is
    /// written in. The active language starts out as `source`.
    #[must_use]
    pub fn new(translator: T, source: Language) -> Self {
        Self {
            translator,
            source,
            state: Mutex::new(GatewayState {
                target: source,
                cache: HashMap::new(),
            }),
        }
    }

    /// Language content is written in.
    #[must_use]
    pub const fn source_language(&self) -> Language {
        self.source
    }

    /// Language text is currently translated into.
    #[must_use]
    pub fn language(&self) -> Language {
        self.lock().target
    }

    /// Switch the active language.
    ///
    /// Returns `true` when the language changed, in which case every cached
    /// translation is discarded.
    #[must_use]
    pub fn set_language(&self, language: Language) -> bool {
        let mut state = self.lock();
        if state.target == language {
            return false;
        }
        info!(
            "interface language {} -> {language}; dropping {} cached translations",
            state.target,
            state.cache.len()
        );
        state.target = language;
        state.cache.clear();
        true
    }

    /// Translate `text` into the active language.
    ///
    /// Text is returned unchanged when the active language is the source
    /// language or when it contains only whitespace.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`TranslationError`].
    pub fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let target = self.language();
        if target == self.source || text.trim().is_empty() {
            return Ok(text.to_owned());
        }

        let key = (text.to_owned(), target);
        if let Some(hit) = self.lock().cache.get(&key) {
            debug!("translation cache hit for {text:?} ({target})");
            return Ok(hit.clone());
        }

        let translated = self.translator.translate(text, self.source, target)?;
        let mut state = self.lock();
        // The language may have changed while the backend was busy.
        if state.target == target {
            state.cache.insert(key, translated.clone());
        }
        Ok(translated)
    }

    /// Translate `text`, keeping the original when the backend fails.
    #[must_use]
    pub fn translate_or_original(&self, text: &str) -> String {
        self.translate(text).unwrap_or_else(|err| {
            warn!("keeping untranslated text {text:?}: {err}");
            text.to_owned()
        })
    }

    /// Translate several strings, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Propagates the first backend [`TranslationError`].
    pub fn translate_all<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> Result<Vec<String>, TranslationError> {
        texts.iter().map(|text| self.translate(text.as_ref())).collect()
    }

    /// Number of cached translations for the active language.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.lock().cache.len()
    }

    /// Borrow the wrapped backend.
    #[must_use]
    pub const fn translator(&self) -> &T {
        &self.translator
    }

    fn lock(&self) -> MutexGuard<'_, GatewayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingTranslator;
    use rstest::{fixture, rstest};

    #[fixture]
    fn gateway() -> TranslationGateway<RecordingTranslator> {
        let gateway = TranslationGateway::new(RecordingTranslator::default(), Language::Korean);
        assert!(gateway.set_language(Language::English));
        gateway
    }

    #[rstest]
    fn source_language_bypasses_backend() {
        let gateway = TranslationGateway::new(RecordingTranslator::default(), Language::Korean);
        let out = gateway.translate("관광지").expect("pass-through");
        assert_eq!(out, "관광지");
        assert_eq!(gateway.translator().calls(), 0);
    }

    #[rstest]
    fn repeated_text_hits_cache(gateway: TranslationGateway<RecordingTranslator>) {
        let first = gateway.translate("관광지").expect("translated");
        let second = gateway.translate("관광지").expect("cached");
        assert_eq!(first, second);
        assert_eq!(first, "[en] 관광지");
        assert_eq!(gateway.translator().calls(), 1);
    }

    #[rstest]
    fn language_change_invalidates_cache(gateway: TranslationGateway<RecordingTranslator>) {
        gateway.translate("관광지").expect("translated");
        assert!(gateway.set_language(Language::Japanese));
        assert_eq!(gateway.cached_len(), 0);

        let out = gateway.translate("관광지").expect("translated again");
        assert_eq!(out, "[ja] 관광지");
        assert_eq!(gateway.translator().calls(), 2);
    }

    #[rstest]
    fn setting_same_language_keeps_cache(gateway: TranslationGateway<RecordingTranslator>) {
        gateway.translate("관광지").expect("translated");
        assert!(!gateway.set_language(Language::English));
        assert_eq!(gateway.cached_len(), 1);
    }

    #[rstest]
    fn blank_text_is_returned_untouched(gateway: TranslationGateway<RecordingTranslator>) {
        assert_eq!(gateway.translate("  ").expect("blank"), "  ");
        assert_eq!(gateway.translator().calls(), 0);
    }

    #[rstest]
    fn failures_are_not_cached() {
        let gateway = TranslationGateway::new(RecordingTranslator::failing(), Language::Korean);
        assert!(gateway.set_language(Language::English));

        assert!(gateway.translate("지도").is_err());
        assert!(gateway.translate("지도").is_err());
        assert_eq!(gateway.cached_len(), 0);
        assert_eq!(gateway.translator().calls(), 2);
    }

    #[rstest]
    fn fallback_keeps_original_text() {
        let gateway = TranslationGateway::new(RecordingTranslator::failing(), Language::Korean);
        assert!(gateway.set_language(Language::English));
        assert_eq!(gateway.translate_or_original("지도"), "지도");
    }

    #[rstest]
    fn translate_all_preserves_order(gateway: TranslationGateway<RecordingTranslator>) {
        let out = gateway
            .translate_all(&["하나", "둘"])
            .expect("batch translated");
        assert_eq!(out, vec!["[en] 하나".to_owned(), "[en] 둘".to_owned()]);
    }
}
