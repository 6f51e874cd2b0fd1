//! Recursive resolution of multilingual nodes.
//!
//! A JSON object counts as a multilingual node when at least one of its keys
//! is a supported language code. The check is a heuristic: a plain object
//! that happens to carry an `es` key is treated as multilingual too, and
//! callers rely on that classification staying stable.

use serde_json::{Map, Value};

use crate::{FallbackChain, Language};

/// Whether `object` is a multilingual node.
///
/// # Examples
/// ```
/// use multilingual::is_multilingual;
/// use serde_json::json;
///
/// let node = json!({ "de": "Brücke", "note": "x" });
/// assert!(is_multilingual(node.as_object().expect("object")));
/// let plain = json!({ "title": "Brücke" });
/// assert!(!is_multilingual(plain.as_object().expect("object")));
/// ```
#[must_use]
pub fn is_multilingual(object: &Map<String, Value>) -> bool {
    object.keys().any(|key| Language::is_language_key(key))
}

/// Null and empty strings do not count as a translation.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.is_empty(),
        _ => true,
    }
}

/// Selects one value per multilingual node using a fixed fallback chain.
///
/// The resolver is total: every JSON shape is accepted and nothing fails.
/// Values chosen from a multilingual node are returned as stored, so a
/// malformed node whose translation is itself an object passes through
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldResolver {
    chain: FallbackChain,
}

impl FieldResolver {
    /// Build a resolver with an explicit fallback chain.
    #[must_use]
    pub const fn new(chain: FallbackChain) -> Self {
        Self { chain }
    }

    /// Fallback chain applied after the requested language.
    #[must_use]
    pub const fn chain(&self) -> &FallbackChain {
        &self.chain
    }

    /// Resolve every multilingual node inside `value` to `language`.
    ///
    /// # Examples
    /// ```
    /// use multilingual::{FieldResolver, Language};
    /// use serde_json::json;
    ///
    /// let resolver = FieldResolver::default();
    /// let node = json!({ "it": "Architettura", "fr": "Architecture" });
    /// assert_eq!(resolver.resolve(&node, Language::De), json!("Architecture"));
    /// assert_eq!(resolver.resolve(&json!({}), Language::Es), json!({}));
    /// ```
    #[must_use]
    pub fn resolve(&self, value: &Value, language: Language) -> Value {
        match value {
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.resolve(item, language))
                    .collect(),
            ),
            Value::Object(object) if is_multilingual(object) => self.select(object, language),
            Value::Object(object) => Value::Object(
                object
                    .iter()
                    .map(|(key, nested)| (key.clone(), self.resolve(nested, language)))
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    /// Resolve `value` and return it as trimmed, non-empty text.
    ///
    /// # Examples
    /// ```
    /// use multilingual::{FieldResolver, Language};
    /// use serde_json::json;
    ///
    /// let resolver = FieldResolver::default();
    /// let branch = json!({ "es": " Ciencias Exactas ", "en": "Exact Sciences" });
    /// assert_eq!(
    ///     resolver.resolve_text(&branch, Language::Es).as_deref(),
    ///     Some("Ciencias Exactas")
    /// );
    /// assert_eq!(resolver.resolve_text(&json!(""), Language::Es), None);
    /// ```
    #[must_use]
    pub fn resolve_text(&self, value: &Value, language: Language) -> Option<String> {
        match self.resolve(value, language) {
            Value::String(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            }
            _ => None,
        }
    }

    fn select(&self, node: &Map<String, Value>, language: Language) -> Value {
        let preferred = std::iter::once(language).chain(self.chain.languages().iter().copied());
        preferred
            .filter_map(|candidate| node.get(candidate.code()))
            .chain(node.values().take(1))
            .find(|candidate| is_present(candidate))
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for node selection; property-style checks live in
    //! `tests/resolver_properties.rs`.

    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn resolver() -> FieldResolver {
        FieldResolver::default()
    }

    #[rstest]
    #[case(json!(null))]
    #[case(json!(true))]
    #[case(json!(42))]
    #[case(json!("texto"))]
    fn scalars_are_returned_unchanged(resolver: FieldResolver, #[case] value: Value) {
        assert_eq!(resolver.resolve(&value, Language::En), value);
    }

    #[rstest]
    fn requested_language_wins(resolver: FieldResolver) {
        let node = json!({ "es": "Filosofía", "en": "Philosophy", "de": "Philosophie" });
        assert_eq!(resolver.resolve(&node, Language::De), json!("Philosophie"));
    }

    #[rstest]
    fn empty_translation_falls_through(resolver: FieldResolver) {
        let node = json!({ "en": "", "es": "Psicología" });
        assert_eq!(resolver.resolve(&node, Language::En), json!("Psicología"));
    }

    #[rstest]
    fn first_key_is_the_last_resort(resolver: FieldResolver) {
        let node = json!({ "pt": "Arquitetura", "es": null, "ja": "建築" });
        assert_eq!(resolver.resolve(&node, Language::Fr), json!("Arquitetura"));
    }

    #[rstest]
    fn node_without_usable_values_becomes_empty_text(resolver: FieldResolver) {
        let node = json!({ "es": "", "en": null });
        assert_eq!(resolver.resolve(&node, Language::It), json!(""));
    }

    #[rstest]
    fn non_string_translations_pass_through(resolver: FieldResolver) {
        let node = json!({ "es": { "nested": { "en": "deep" } } });
        assert_eq!(
            resolver.resolve(&node, Language::Es),
            json!({ "nested": { "en": "deep" } })
        );
    }

    #[rstest]
    fn custom_chain_changes_fallback(resolver: FieldResolver) {
        let english_first = FieldResolver::new(
            FallbackChain::new(vec![Language::En, Language::Es]).expect("valid chain"),
        );
        let node = json!({ "es": "Matemáticas", "en": "Mathematics" });
        assert_eq!(english_first.resolve(&node, Language::It), json!("Mathematics"));
        assert_eq!(resolver.resolve(&node, Language::It), json!("Matemáticas"));
    }

    #[rstest]
    fn plain_objects_keep_their_keys(resolver: FieldResolver) {
        let module = json!({
            "title": { "es": "Estática", "en": "Statics" },
            "duration": "2h",
            "lessons": [{ "id": "l1", "title": { "es": "Fuerzas" } }]
        });
        let resolved = resolver.resolve(&module, Language::En);
        assert_eq!(
            resolved,
            json!({
                "title": "Statics",
                "duration": "2h",
                "lessons": [{ "id": "l1", "title": "Fuerzas" }]
            })
        );
    }
}
