//! Course payloads as seen by clients.
//!
//! Field names accept both the server's camelCase and the snake_case and
//! legacy spellings found in stored documents (`id`, `branch`,
//! `thumbnail_url`).

use serde::{Deserialize, Deserializer};

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}

/// A localized course.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// External identifier.
    #[serde(alias = "id")]
    pub slug: String,
    /// Title.
    pub title: String,
    /// Category name.
    #[serde(alias = "branch", default, deserialize_with = "blank_as_none")]
    pub category: Option<String>,
    /// `None` for the general course of a category.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub career: Option<String>,
    /// Difficulty tag.
    pub difficulty: String,
    /// Expected duration.
    pub duration: String,
    /// Long description.
    pub description: String,
    /// Introduction text.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub intro: Option<String>,
    /// Thumbnail image URL.
    #[serde(alias = "thumbnail_url")]
    pub thumbnail_url: String,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Modules in order.
    #[serde(default)]
    pub modules: Vec<Module>,
}

/// A course module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Module {
    /// Module title.
    pub title: String,
    /// Expected duration.
    #[serde(default)]
    pub duration: Option<String>,
    /// Lessons in order.
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// Kind of lesson content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Written content.
    Text,
    /// Embedded video.
    Video,
}

/// A single lesson.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lesson {
    /// Lesson identifier, when authored.
    #[serde(default)]
    pub id: Option<String>,
    /// Lesson title.
    pub title: String,
    /// Kind of content.
    #[serde(alias = "contentType", alias = "type")]
    pub content_type: ContentType,
    /// Body of a text lesson.
    #[serde(default)]
    pub content: Option<String>,
    /// Video address of a video lesson.
    #[serde(default, alias = "videoUrl")]
    pub video_url: Option<String>,
    /// Expected duration.
    #[serde(default)]
    pub duration: Option<String>,
    /// Short summary.
    #[serde(default)]
    pub description: Option<String>,
}

/// Response of `GET /courses/resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerCourses {
    /// General course of the career's category.
    pub category_course: Course,
    /// Course for the career.
    pub career_course: Course,
}

/// Response of `GET /courses/categories/{category}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryCourses {
    /// The category's general course.
    pub general: Course,
    /// Career courses of the category.
    pub careers: Vec<Course>,
}

/// One item of `GET /courses/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryEntry {
    /// Category slug.
    pub category: String,
    /// First course of the category.
    pub course: Course,
}
