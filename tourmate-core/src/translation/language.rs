//! Interface languages offered by the app.

/// A language the interface can be shown in.
///
/// # Examples
/// ```
/// use tourmate_core::Language;
///
/// assert_eq!(Language::ChineseSimplified.code(), "zh-CN");
/// assert_eq!("JA".parse(), Ok(Language::Japanese));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// Korean, the language the content is authored in.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ko"))]
    Korean,
    /// English.
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,
    /// Japanese.
    #[cfg_attr(feature = "serde", serde(rename = "ja"))]
    Japanese,
    /// Simplified Chinese.
    #[cfg_attr(feature = "serde", serde(rename = "zh-CN"))]
    ChineseSimplified,
    /// Traditional Chinese.
    #[cfg_attr(feature = "serde", serde(rename = "zh-TW"))]
    ChineseTraditional,
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Korean,
        Self::English,
        Self::Japanese,
        Self::ChineseSimplified,
        Self::ChineseTraditional,
    ];

    /// Language code understood by the translation service.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Korean => "ko",
            Self::English => "en",
            Self::Japanese => "ja",
            Self::ChineseSimplified => "zh-CN",
            Self::ChineseTraditional => "zh-TW",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown language '{s}'"))
    }
}
