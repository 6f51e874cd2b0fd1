//! Curated introductions overlaid onto course definitions.
//!
//! The overlay file maps a career or category slug to an object holding a
//! multilingual `intro`:
//!
//! ```json
//! { "ingenieria": { "intro": { "es": "...", "en": "..." } } }
//! ```

use camino::Utf8Path;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::definition::{CourseDefinition, definition_file_for, open_dir};
use crate::error::DefinitionError;

/// Optional overlay file looked up next to the definitions.
pub const INTRODUCTIONS_FILE: &str = "introductions.json";

#[derive(Debug, Deserialize)]
struct IntroductionEntry {
    intro: Value,
}

/// Introductions keyed by career or category slug.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Introductions {
    entries: Map<String, Value>,
}

impl Introductions {
    /// Parse the overlay from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::Parse`] when the text is not an object of
    /// `{ "intro": ... }` entries.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let raw: Map<String, Value> =
            serde_json::from_str(json).map_err(|err| parse_error(&err))?;
        let mut entries = Map::new();
        for (key, value) in raw {
            let entry: IntroductionEntry =
                serde_json::from_value(value).map_err(|err| parse_error(&err))?;
            entries.insert(key, entry.intro);
        }
        Ok(Self { entries })
    }

    /// Read [`INTRODUCTIONS_FILE`] from `dir` when it exists.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] when the directory cannot be opened or
    /// the file exists but cannot be read or parsed.
    pub fn load(dir: &Utf8Path) -> Result<Option<Self>, DefinitionError> {
        let handle = open_dir(dir)?;
        if !handle.exists(INTRODUCTIONS_FILE) {
            return Ok(None);
        }
        let contents =
            handle
                .read_to_string(INTRODUCTIONS_FILE)
                .map_err(|err| DefinitionError::Read {
                    file: INTRODUCTIONS_FILE.to_owned(),
                    message: err.to_string(),
                })?;
        Self::from_json(&contents).map(Some)
    }

    /// Number of introductions in the overlay.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the overlay is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set `intro` on every definition whose file matches an overlay key.
    ///
    /// Returns the number of definitions updated.
    pub fn apply(&self, definitions: &mut [CourseDefinition]) -> usize {
        let mut applied = 0;
        for (key, intro) in &self.entries {
            let file_name = definition_file_for(key);
            for definition in definitions
                .iter_mut()
                .filter(|definition| definition.file_name() == file_name)
            {
                definition.set_intro(intro.clone());
                applied += 1;
            }
        }
        applied
    }
}

fn parse_error(err: &serde_json::Error) -> DefinitionError {
    DefinitionError::Parse {
        file: INTRODUCTIONS_FILE.to_owned(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn entries_without_intro_are_rejected() {
        let err = Introductions::from_json(r#"{ "filosofia": { "summary": "x" } }"#)
            .expect_err("missing intro");
        assert_eq!(err.file(), Some(INTRODUCTIONS_FILE));
    }

    #[rstest]
    fn unmatched_keys_do_not_touch_definitions() {
        let mut definitions = vec![
            CourseDefinition::from_json("filosofia_multilang.json", r#"{ "id": "intro-filosofia" }"#)
                .expect("valid definition"),
        ];
        let intros = Introductions::from_json(r#"{ "medicina": { "intro": "x" } }"#)
            .expect("valid introductions");
        assert_eq!(intros.apply(&mut definitions), 0);
        assert!(definitions[0].document().get("intro").is_none());
    }
}
