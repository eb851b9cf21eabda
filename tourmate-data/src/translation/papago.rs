//! Wire types for the Papago machine translation service.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct TranslationResponse {
    #[serde(default)]
    pub(crate) message: Option<Message>,
    #[serde(default)]
    pub(crate) error: Option<GatewayError>,
    #[serde(default, rename = "errorCode")]
    pub(crate) error_code: Option<String>,
    #[serde(default, rename = "errorMessage")]
    pub(crate) error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Message {
    pub(crate) result: TranslationResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TranslationResult {
    pub(crate) translated_text: String,
}

/// Error shape used by the API gateway in front of the service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GatewayError {
    #[serde(default)]
    pub(crate) error_code: Option<String>,
    #[serde(default)]
    pub(crate) message: Option<String>,
}

/// Outcome carried by a response body.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Translated(String),
    Rejected { code: String, message: String },
    Empty,
}

impl TranslationResponse {
    pub(crate) fn into_outcome(self) -> Outcome {
        if let Some(message) = self.message {
            return Outcome::Translated(message.result.translated_text);
        }
        if let Some(error) = self.error {
            return Outcome::Rejected {
                code: error.error_code.unwrap_or_default(),
                message: error.message.unwrap_or_default(),
            };
        }
        match (self.error_code, self.error_message) {
            (None, None) => Outcome::Empty,
            (code, message) => Outcome::Rejected {
                code: code.unwrap_or_default(),
                message: message.unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn outcome(json: &str) -> Outcome {
        serde_json::from_str::<TranslationResponse>(json)
            .expect("should deserialise")
            .into_outcome()
    }

    #[rstest]
    fn success_body_yields_translation() {
        let json = r#"{"message":{"@type":"response","result":{
            "srcLangType":"ko","tarLangType":"en","translatedText":"Map"}}}"#;
        assert_eq!(outcome(json), Outcome::Translated("Map".to_owned()));
    }

    #[rstest]
    #[case(
        r#"{"error":{"errorCode":"N2MT05","message":"target is not supported"}}"#,
        "N2MT05",
        "target is not supported"
    )]
    #[case(
        r#"{"errorCode":"024","errorMessage":"Authentication failed"}"#,
        "024",
        "Authentication failed"
    )]
    fn error_bodies_yield_rejection(
        #[case] json: &str,
        #[case] code: &str,
        #[case] message: &str,
    ) {
        assert_eq!(
            outcome(json),
            Outcome::Rejected {
                code: code.to_owned(),
                message: message.to_owned(),
            }
        );
    }

    #[rstest]
    fn unrelated_body_is_empty() {
        assert_eq!(outcome("{}"), Outcome::Empty);
    }
}
