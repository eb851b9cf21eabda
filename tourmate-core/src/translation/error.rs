use thiserror::Error;

use super::Language;

/// Errors from [`crate::translation::Translator::translate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// The text to translate was empty.
    #[error("text to translate must not be empty")]
    EmptyText,

    /// The backend cannot translate between the two languages.
    #[error("translation from {from} to {to} is not supported")]
    UnsupportedPair {
        /// Language of the input text.
        from: Language,
        /// Requested output language.
        to: Language,
    },

    /// A network error occurred while contacting the translation service.
    #[error("network error contacting {url}: {message}")]
    NetworkError {
        /// URL that was being requested.
        url: String,
        /// Human-readable error description.
        message: String,
    },

    /// The translation request timed out.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// URL that was being requested.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },

    /// The translation service returned an HTTP error status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpError {
        /// URL that was being requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error message from the response or status text.
        message: String,
    },

    /// The translation service reported a failure in its response body.
    #[error("translation service error ({code}): {message}")]
    ServiceError {
        /// Error code reported by the service.
        code: String,
        /// Error message reported by the service.
        message: String,
    },

    /// The response could not be parsed.
    #[error("failed to parse translation response: {message}")]
    ParseError {
        /// Description of the parsing failure.
        message: String,
    },
}
