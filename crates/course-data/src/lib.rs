//! Static multilingual course definitions for the catalogue loader.
//!
//! The catalogue ships one JSON definition per category and per career.
//! This crate knows which files make up that set, reads them through a
//! capability-scoped directory handle, and overlays curated introductions
//! onto the matching definitions. It deliberately stays independent of the
//! backend domain types: definitions are handed over as raw JSON documents
//! and validated by the loader.
//!
//! # Example
//!
//! ```
//! use course_data::{CourseDefinition, Introductions};
//!
//! let mut definitions = vec![
//!     CourseDefinition::from_json(
//!         "ingenieria_multilang.json",
//!         r#"{ "id": "intro-ingenieria", "title": { "es": "Ingeniería" } }"#,
//!     )
//!     .expect("valid definition"),
//! ];
//! let intros = Introductions::from_json(
//!     r#"{ "ingenieria": { "intro": { "es": "Bienvenida" } } }"#,
//! )
//! .expect("valid introductions");
//!
//! assert_eq!(intros.apply(&mut definitions), 1);
//! assert_eq!(definitions[0].document()["intro"]["es"], "Bienvenida");
//! ```

mod definition;
mod error;
mod introductions;

pub use definition::{
    CourseDefinition, DEFINITION_FILES, LoadedDefinitions, definition_file_for, load_definitions,
};
pub use error::DefinitionError;
pub use introductions::{INTRODUCTIONS_FILE, Introductions};
