//! Supported content languages and locale parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Languages that may appear as keys of a multilingual node.
///
/// The wire form is the lowercase two-letter code.
///
/// # Examples
/// ```
/// use multilingual::Language;
///
/// assert_eq!(Language::from_code("fr"), Some(Language::Fr));
/// assert_eq!(Language::default(), Language::Es);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish, the language course content is authored in.
    #[default]
    Es,
    /// English.
    En,
    /// French.
    Fr,
    /// Italian.
    It,
    /// German.
    De,
}

/// Error returned when a string is not one of the supported language codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code: {code}")]
pub struct UnknownLanguageError {
    /// The rejected input.
    pub code: String,
}

impl Language {
    /// Every supported language in default preference order.
    pub const ALL: [Self; 5] = [Self::Es, Self::En, Self::Fr, Self::It, Self::De];

    /// Two-letter code used as a JSON key and query value.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
            Self::Fr => "fr",
            Self::It => "it",
            Self::De => "de",
        }
    }

    /// Match an exact two-letter code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }

    /// Parse the `lang` query parameter.
    ///
    /// Surrounding whitespace and ASCII case are ignored. Absent or
    /// unrecognised values select the default language rather than failing.
    ///
    /// # Examples
    /// ```
    /// use multilingual::Language;
    ///
    /// assert_eq!(Language::from_query(Some(" EN ")), Language::En);
    /// assert_eq!(Language::from_query(Some("pt")), Language::Es);
    /// assert_eq!(Language::from_query(None), Language::Es);
    /// ```
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.map(|value| value.trim().to_ascii_lowercase())
            .and_then(|value| Self::from_code(&value))
            .unwrap_or_default()
    }

    /// Whether `key` is one of the language codes used to detect multilingual
    /// nodes.
    #[must_use]
    pub fn is_language_key(key: &str) -> bool {
        Self::from_code(key).is_some()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguageError { code: s.to_owned() })
    }
}

/// Reduce a locale tag such as `en-US` or `pt_BR` to a supported language.
///
/// Only the primary subtag is considered. Returns `None` when the primary
/// subtag is not supported, leaving the caller to pick a default.
///
/// # Examples
/// ```
/// use multilingual::{Language, normalize_locale};
///
/// assert_eq!(normalize_locale("en-US"), Some(Language::En));
/// assert_eq!(normalize_locale("de_AT"), Some(Language::De));
/// assert_eq!(normalize_locale("pt-BR"), None);
/// ```
#[must_use]
pub fn normalize_locale(raw: &str) -> Option<Language> {
    let primary = raw
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    Language::from_code(&primary)
}

#[cfg(test)]
mod tests {
    //! Unit tests for language parsing.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("es", Some(Language::Es))]
    #[case("en", Some(Language::En))]
    #[case("fr", Some(Language::Fr))]
    #[case("it", Some(Language::It))]
    #[case("de", Some(Language::De))]
    #[case("EN", None)]
    #[case("pt", None)]
    #[case("", None)]
    fn from_code_is_exact(#[case] input: &str, #[case] expected: Option<Language>) {
        assert_eq!(Language::from_code(input), expected);
    }

    #[rstest]
    #[case(Some("fr"), Language::Fr)]
    #[case(Some("  De"), Language::De)]
    #[case(Some("en-US"), Language::Es)]
    #[case(Some(""), Language::Es)]
    #[case(None, Language::Es)]
    fn from_query_defaults_to_spanish(#[case] input: Option<&str>, #[case] expected: Language) {
        assert_eq!(Language::from_query(input), expected);
    }

    #[rstest]
    #[case("es-ES", Some(Language::Es))]
    #[case("en-US", Some(Language::En))]
    #[case("IT", Some(Language::It))]
    #[case("fr_CA", Some(Language::Fr))]
    #[case("zh-Hans-CN", None)]
    #[case("", None)]
    fn normalize_locale_uses_primary_subtag(
        #[case] input: &str,
        #[case] expected: Option<Language>,
    ) {
        assert_eq!(normalize_locale(input), expected);
    }

    #[rstest]
    fn serde_uses_two_letter_codes() {
        let encoded = serde_json::to_string(&Language::It).expect("serialise language");
        assert_eq!(encoded, "\"it\"");
        let decoded: Language = serde_json::from_str("\"de\"").expect("deserialise language");
        assert_eq!(decoded, Language::De);
    }

    #[rstest]
    fn from_str_reports_rejected_code() {
        let err = "xx".parse::<Language>().expect_err("unknown code should fail");
        assert_eq!(err.to_string(), "unsupported language code: xx");
    }
}
