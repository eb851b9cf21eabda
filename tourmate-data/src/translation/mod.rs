//! HTTP translator for the Papago machine translation service.
//!
//! [`HttpTranslator`] implements [`tourmate_core::Translator`]; it performs
//! one request per call and leaves memoisation to
//! [`tourmate_core::TranslationGateway`].

mod papago;
mod provider;

pub use provider::{DEFAULT_TRANSLATION_BASE_URL, HttpTranslator, HttpTranslatorConfig};
