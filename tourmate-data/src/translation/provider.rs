//! HTTP-based `Translator` using the Papago machine translation service.

use std::time::Duration;

use log::debug;
use tourmate_core::{Language, TranslationError, Translator};

use super::papago::{Outcome, TranslationResponse};
use crate::bridge::{
    Bridge, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, ProviderBuildError, RawResponse,
    TransportFailure,
};

/// Default base URL of the translation service.
pub const DEFAULT_TRANSLATION_BASE_URL: &str = "https://papago.apigw.ntruss.com";

const TRANSLATE_PATH: &str = "/nmt/v1/translation";
const CLIENT_ID_HEADER: &str = "X-NCP-APIGW-API-KEY-ID";
const CLIENT_SECRET_HEADER: &str = "X-NCP-APIGW-API-KEY";

/// Configuration for [`HttpTranslator`].
#[derive(Clone)]
pub struct HttpTranslatorConfig {
    /// Base URL for the translation service.
    pub base_url: String,
    /// Client identifier sent with every request.
    pub client_id: String,
    /// Client secret sent with every request.
    pub client_secret: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for HttpTranslatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTranslatorConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for HttpTranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TRANSLATION_BASE_URL.to_owned(),
            client_id: String::new(),
            client_secret: String::new(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpTranslatorConfig {
    /// Create a configuration for `base_url` with the given credentials.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Translator backed by the Papago machine translation service.
///
/// Each call performs one request; wrap the translator in a
/// [`TranslationGateway`](tourmate_core::TranslationGateway) to memoise.
///
/// # Example
///
/// ```no_run
/// use tourmate_core::{Language, TranslationGateway};
/// use tourmate_data::translation::HttpTranslator;
///
/// let translator =
///     HttpTranslator::new("https://papago.apigw.ntruss.com", "client-id", "client-secret")?;
/// let gateway = TranslationGateway::new(translator, Language::Korean);
/// assert!(gateway.set_language(Language::English));
/// println!("{}", gateway.translate_or_original("지도"));
/// # Ok::<(), tourmate_data::ProviderBuildError>(())
/// ```
#[derive(Debug)]
pub struct HttpTranslator {
    bridge: Bridge,
    config: HttpTranslatorConfig,
}

impl HttpTranslator {
    /// Create a translator with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpTranslatorConfig::new(base_url, client_id, client_secret))
    }

    /// Create a translator with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpTranslatorConfig) -> Result<Self, ProviderBuildError> {
        let bridge = Bridge::new(&config.user_agent, config.timeout)?;
        Ok(Self { bridge, config })
    }

    /// The configuration this translator was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpTranslatorConfig {
        &self.config
    }

    fn translate_url(&self) -> String {
        format!(
            "{}{TRANSLATE_PATH}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn convert_failure(&self, failure: TransportFailure, url: &str) -> TranslationError {
        match failure {
            TransportFailure::Timeout => TranslationError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            },
            TransportFailure::Network(message) => TranslationError::NetworkError {
                url: url.to_owned(),
                message,
            },
        }
    }
}

/// Turn a raw service response into translated text or an error.
///
/// A recognised error body wins over the status code; an unrecognised body on
/// a failed status is reported as an HTTP error.
fn convert_response(response: &RawResponse, url: &str) -> Result<String, TranslationError> {
    let parsed = serde_json::from_str::<TranslationResponse>(&response.body)
        .map(TranslationResponse::into_outcome);
    match parsed {
        Ok(Outcome::Translated(text)) if response.is_success() => Ok(text),
        Ok(Outcome::Rejected { code, message }) => {
            Err(TranslationError::ServiceError { code, message })
        }
        _ if !response.is_success() => Err(TranslationError::HttpError {
            url: url.to_owned(),
            status: response.status,
            message: response.body.trim().to_owned(),
        }),
        Ok(_) => Err(TranslationError::ParseError {
            message: "translation response carried no result".to_owned(),
        }),
        Err(err) => Err(TranslationError::ParseError {
            message: err.to_string(),
        }),
    }
}

impl Translator for HttpTranslator {
    fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::EmptyText);
        }
        if from == to {
            return Err(TranslationError::UnsupportedPair { from, to });
        }
        let url = self.translate_url();
        debug!("translating {} chars from {from} to {to}", text.chars().count());
        let request = self
            .bridge
            .client()
            .post(&url)
            .header(CLIENT_ID_HEADER, &self.config.client_id)
            .header(CLIENT_SECRET_HEADER, &self.config.client_secret)
            .form(&[("source", from.code()), ("target", to.code()), ("text", text)]);
        let response = self
            .bridge
            .execute(request)
            .map_err(|failure| self.convert_failure(failure, &url))?;
        convert_response(&response, &url)
    }
}
