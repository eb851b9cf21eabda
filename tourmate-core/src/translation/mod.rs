//! Translate interface text into the user's language.
//!
//! The [`Translator`] trait abstracts a machine-translation backend. Callers
//! should not use it directly: a single [`TranslationGateway`] wraps the
//! backend, memoises results per `(text, language)` and drops the cache when
//! the active language changes.

mod error;
mod gateway;
mod language;

pub use error::TranslationError;
pub use gateway::{TranslationGateway, Translator};
pub use language::Language;
