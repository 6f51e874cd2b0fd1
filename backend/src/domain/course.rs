//! Course aggregate and its localized projection.
//!
//! Text fields may hold either plain strings or multilingual nodes, so they
//! are stored as [`LocalizedValue`] and only flattened to one language by
//! [`Course::localize`].

use std::fmt;
use std::str::FromStr;

use multilingual::{FieldResolver, Language, is_multilingual};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::slug::is_valid_slug;

/// Course difficulty tag. Never multilingual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Entry level.
    Beginner,
    /// Requires some background.
    Intermediate,
    /// Requires solid background.
    Advanced,
}

impl Difficulty {
    /// Lowercase wire and storage form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CourseValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(CourseValidationError::InvalidDifficulty {
                value: other.to_owned(),
            }),
        }
    }
}

/// A field value that may be plain or multilingual.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedValue(Value);

impl LocalizedValue {
    /// Wrap a raw JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the stored JSON.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take ownership of the stored JSON.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Whether the field is absent (`null`).
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.0.is_null()
    }

    /// Resolve every multilingual node to `language`.
    #[must_use]
    pub fn localize(&self, resolver: &FieldResolver, language: Language) -> Value {
        resolver.resolve(&self.0, language)
    }
}

impl From<Value> for LocalizedValue {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&str> for LocalizedValue {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_owned()))
    }
}

/// Validation errors raised when building a [`Course`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseValidationError {
    /// The document has no slug.
    #[error("course slug is missing")]
    MissingSlug,
    /// The slug contains characters outside `[a-z0-9-]`.
    #[error("course slug '{slug}' must be lowercase letters, digits and hyphens")]
    InvalidSlug {
        /// Rejected slug.
        slug: String,
    },
    /// A required field is absent.
    #[error("course field '{field}' is required")]
    MissingField {
        /// Wire name of the field.
        field: &'static str,
    },
    /// A field that must be a list is neither a list nor a multilingual
    /// node.
    #[error("course field '{field}' must be a list or a multilingual node")]
    NotAList {
        /// Wire name of the field.
        field: &'static str,
    },
    /// Difficulty is not one of the supported tags.
    #[error("unsupported difficulty '{value}'")]
    InvalidDifficulty {
        /// Rejected value.
        value: String,
    },
}

/// Unvalidated course document as authored or as submitted for seeding.
///
/// Accepts the field names used by stored documents (`id`, `branch`,
/// `thumbnail_url`) as aliases of the canonical camelCase names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    /// External identifier.
    #[serde(alias = "id", default)]
    pub slug: Option<String>,
    /// Title, plain or multilingual.
    #[serde(default)]
    pub title: LocalizedValue,
    /// Category name.
    #[serde(alias = "branch", default)]
    pub category: LocalizedValue,
    /// Career name; absent on general courses.
    #[serde(default)]
    pub career: LocalizedValue,
    /// `beginner`, `intermediate`, or `advanced`.
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Expected duration.
    #[serde(default)]
    pub duration: LocalizedValue,
    /// Long description.
    #[serde(default)]
    pub description: LocalizedValue,
    /// Optional introduction text.
    #[serde(default)]
    pub intro: LocalizedValue,
    /// Thumbnail image URL.
    #[serde(alias = "thumbnail_url", default)]
    pub thumbnail_url: Option<String>,
    /// Tag list, possibly per language.
    #[serde(default)]
    pub tags: LocalizedValue,
    /// Module list, possibly per language.
    #[serde(default)]
    pub modules: LocalizedValue,
}

/// Validated course document.
///
/// ## Invariants
/// - `slug` is a valid slug and is the external identity of the course.
/// - `title`, `duration`, and `description` are present.
/// - `tags` and `modules` are lists, or multilingual nodes holding lists.
///
/// # Examples
/// ```
/// use course_catalogue::domain::{Course, CourseDraft};
/// use serde_json::json;
///
/// let draft: CourseDraft = serde_json::from_value(json!({
///     "id": "intro-filosofia",
///     "title": { "es": "Introducción a la Filosofía", "en": "Introduction to Philosophy" },
///     "branch": "Ciencias Humanas",
///     "career": "Filosofía",
///     "difficulty": "beginner",
///     "duration": "4 semanas",
///     "description": { "es": "Preguntas fundamentales" },
///     "thumbnail_url": "https://cdn.example.invalid/filosofia.png",
///     "modules": []
/// }))
/// .expect("valid draft");
/// let course = Course::try_from(draft).expect("valid course");
/// assert_eq!(course.slug(), "intro-filosofia");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "CourseDraft")]
pub struct Course {
    slug: String,
    title: LocalizedValue,
    category: LocalizedValue,
    career: LocalizedValue,
    difficulty: Difficulty,
    duration: LocalizedValue,
    description: LocalizedValue,
    intro: LocalizedValue,
    thumbnail_url: String,
    tags: LocalizedValue,
    modules: LocalizedValue,
}

fn required(
    value: LocalizedValue,
    field: &'static str,
) -> Result<LocalizedValue, CourseValidationError> {
    if value.is_absent() {
        return Err(CourseValidationError::MissingField { field });
    }
    Ok(value)
}

/// Lists may be stored per language, as in `{"es": ["ética"], "en": ["ethics"]}`.
fn list(
    value: LocalizedValue,
    field: &'static str,
    default_empty: bool,
) -> Result<LocalizedValue, CourseValidationError> {
    match value.as_value() {
        Value::Array(_) => Ok(value),
        Value::Object(object) if is_multilingual(object) => Ok(value),
        Value::Null if default_empty => Ok(LocalizedValue::new(Value::Array(Vec::new()))),
        Value::Null => Err(CourseValidationError::MissingField { field }),
        _ => Err(CourseValidationError::NotAList { field }),
    }
}

impl TryFrom<CourseDraft> for Course {
    type Error = CourseValidationError;

    fn try_from(draft: CourseDraft) -> Result<Self, Self::Error> {
        let slug = draft
            .slug
            .filter(|slug| !slug.trim().is_empty())
            .ok_or(CourseValidationError::MissingSlug)?;
        if !is_valid_slug(&slug) {
            return Err(CourseValidationError::InvalidSlug { slug });
        }
        let difficulty = draft
            .difficulty
            .ok_or(CourseValidationError::MissingField {
                field: "difficulty",
            })?
            .parse()?;
        let thumbnail_url = draft
            .thumbnail_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(CourseValidationError::MissingField {
                field: "thumbnailUrl",
            })?;

        Ok(Self {
            slug,
            title: required(draft.title, "title")?,
            category: draft.category,
            career: draft.career,
            difficulty,
            duration: required(draft.duration, "duration")?,
            description: required(draft.description, "description")?,
            intro: draft.intro,
            thumbnail_url,
            tags: list(draft.tags, "tags", true)?,
            modules: list(draft.modules, "modules", false)?,
        })
    }
}

impl From<Course> for CourseDraft {
    fn from(course: Course) -> Self {
        Self {
            slug: Some(course.slug),
            title: course.title,
            category: course.category,
            career: course.career,
            difficulty: Some(course.difficulty.as_str().to_owned()),
            duration: course.duration,
            description: course.description,
            intro: course.intro,
            thumbnail_url: Some(course.thumbnail_url),
            tags: course.tags,
            modules: course.modules,
        }
    }
}

impl Course {
    /// External identifier.
    #[must_use]
    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }

    /// Title, plain or multilingual.
    #[must_use]
    pub const fn title(&self) -> &LocalizedValue {
        &self.title
    }

    /// Category (stored as `branch` by older documents).
    #[must_use]
    pub const fn category(&self) -> &LocalizedValue {
        &self.category
    }

    /// Career; absent on a category's general course.
    #[must_use]
    pub const fn career(&self) -> &LocalizedValue {
        &self.career
    }

    /// Difficulty tag.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Expected duration.
    #[must_use]
    pub const fn duration(&self) -> &LocalizedValue {
        &self.duration
    }

    /// Long description.
    #[must_use]
    pub const fn description(&self) -> &LocalizedValue {
        &self.description
    }

    /// Optional introduction text.
    #[must_use]
    pub const fn intro(&self) -> &LocalizedValue {
        &self.intro
    }

    /// Thumbnail image URL.
    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        self.thumbnail_url.as_str()
    }

    /// Tag list.
    #[must_use]
    pub const fn tags(&self) -> &LocalizedValue {
        &self.tags
    }

    /// Ordered module list.
    #[must_use]
    pub const fn modules(&self) -> &LocalizedValue {
        &self.modules
    }

    /// Project the course into `language`.
    #[must_use]
    pub fn localize(&self, resolver: &FieldResolver, language: Language) -> LocalizedCourse {
        LocalizedCourse {
            slug: self.slug.clone(),
            title: self.title.localize(resolver, language),
            category: self.category.localize(resolver, language),
            career: self.career.localize(resolver, language),
            difficulty: self.difficulty,
            duration: self.duration.localize(resolver, language),
            description: self.description.localize(resolver, language),
            intro: self.intro.localize(resolver, language),
            thumbnail_url: self.thumbnail_url.clone(),
            tags: self.tags.localize(resolver, language),
            modules: self.modules.localize(resolver, language),
        }
    }
}

/// Course with every multilingual node resolved to one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedCourse {
    /// External identifier.
    pub slug: String,
    /// Title text.
    pub title: Value,
    /// Category name.
    pub category: Value,
    /// Career name, or null for a general course.
    pub career: Value,
    /// Difficulty tag.
    pub difficulty: Difficulty,
    /// Expected duration.
    pub duration: Value,
    /// Long description.
    pub description: Value,
    /// Introduction text, or null.
    pub intro: Value,
    /// Thumbnail image URL.
    pub thumbnail_url: String,
    /// Tags.
    pub tags: Value,
    /// Modules with their lessons.
    pub modules: Value,
}
