//! Multilingual field resolution shared by the course catalogue tiers.
//!
//! Course documents carry text either as plain strings or as multilingual
//! nodes: JSON objects keyed by two-letter language codes. This crate owns
//! the single implementation that walks such documents and selects one
//! string per node, so the server and its clients cannot drift apart.
//!
//! # Example
//!
//! ```
//! use multilingual::{FieldResolver, Language};
//! use serde_json::json;
//!
//! let resolver = FieldResolver::default();
//! let course = json!({
//!     "title": { "es": "Introducción a la Ingeniería", "en": "Introduction to Engineering" },
//!     "tags": [{ "es": "puentes" }, "cad"],
//! });
//!
//! let resolved = resolver.resolve(&course, Language::En);
//! assert_eq!(resolved["title"], "Introduction to Engineering");
//! assert_eq!(resolved["tags"], json!(["puentes", "cad"]));
//! ```

mod chain;
mod language;
mod resolver;

pub use chain::{FallbackChain, FallbackChainError};
pub use language::{Language, UnknownLanguageError, normalize_locale};
pub use resolver::{FieldResolver, is_multilingual};
