//! Definition file set and JSON loading.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use serde_json::{Map, Value};

use crate::error::DefinitionError;

/// Definition files that make up the catalogue, in load order.
pub const DEFINITION_FILES: [&str; 8] = [
    "ingenieria_multilang.json",
    "ciencias_exactas_multilang.json",
    "arquitectura_multilang.json",
    "psicologia_multilang.json",
    "matematicas_multilang.json",
    "filosofia_multilang.json",
    "trabajo_social_multilang.json",
    "ciencias_humanas_multilang.json",
];

/// File name holding the definition for a career or category slug.
///
/// # Examples
/// ```
/// use course_data::definition_file_for;
///
/// assert_eq!(definition_file_for("trabajo-social"), "trabajo_social_multilang.json");
/// ```
#[must_use]
pub fn definition_file_for(key: &str) -> String {
    format!("{}_multilang.json", key.trim().replace('-', "_"))
}

/// One course document read from a definition file.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDefinition {
    file_name: String,
    document: Map<String, Value>,
}

impl CourseDefinition {
    /// Parse a definition from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::Parse`] for malformed JSON and
    /// [`DefinitionError::NotAnObject`] when the top level is not an object.
    pub fn from_json(file_name: &str, json: &str) -> Result<Self, DefinitionError> {
        let value: Value = serde_json::from_str(json).map_err(|err| DefinitionError::Parse {
            file: file_name.to_owned(),
            message: err.to_string(),
        })?;
        match value {
            Value::Object(document) => Ok(Self {
                file_name: file_name.to_owned(),
                document,
            }),
            _ => Err(DefinitionError::NotAnObject {
                file: file_name.to_owned(),
            }),
        }
    }

    /// File the definition was read from.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.file_name.as_str()
    }

    /// Borrow the raw document.
    #[must_use]
    pub const fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// Replace the `intro` field of the document.
    pub fn set_intro(&mut self, intro: Value) {
        self.document.insert("intro".to_owned(), intro);
    }

    /// Consume the definition, returning the document as a JSON value.
    #[must_use]
    pub fn into_document(self) -> Value {
        Value::Object(self.document)
    }
}

/// Outcome of reading every entry of [`DEFINITION_FILES`].
///
/// Each slot corresponds to one file, in [`DEFINITION_FILES`] order.
pub type LoadedDefinitions = Vec<Result<CourseDefinition, DefinitionError>>;

/// Read every definition file from `dir`.
///
/// Missing or malformed files are reported in their own slot and do not
/// prevent the remaining files from loading.
///
/// # Errors
///
/// Returns [`DefinitionError::Directory`] when `dir` cannot be opened.
pub fn load_definitions(dir: &Utf8Path) -> Result<LoadedDefinitions, DefinitionError> {
    let handle = open_dir(dir)?;
    Ok(DEFINITION_FILES
        .iter()
        .map(|file_name| read_definition(&handle, file_name))
        .collect())
}

pub(crate) fn open_dir(dir: &Utf8Path) -> Result<Dir, DefinitionError> {
    Dir::open_ambient_dir(dir, ambient_authority()).map_err(|err| DefinitionError::Directory {
        path: dir.to_path_buf(),
        message: err.to_string(),
    })
}

fn read_definition(dir: &Dir, file_name: &str) -> Result<CourseDefinition, DefinitionError> {
    let contents = dir
        .read_to_string(file_name)
        .map_err(|err| DefinitionError::Read {
            file: file_name.to_owned(),
            message: err.to_string(),
        })?;
    CourseDefinition::from_json(file_name, &contents)
}
