//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their wire
//! shape and are registered with utoipa under the domain type's name.

#![expect(
    dead_code,
    reason = "Schema wrappers are only read by utoipa's derive output"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The course, category, or career does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The course store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected server failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "course not found")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "6f1c2d3e-4b5a-4c6d-8e7f-001122334455")]
    trace_id: Option<String>,
    /// Supplementary details.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Difficulty`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Difficulty)]
pub enum DifficultySchema {
    /// Entry level.
    #[schema(rename = "beginner")]
    Beginner,
    /// Requires some background.
    #[schema(rename = "intermediate")]
    Intermediate,
    /// Requires solid background.
    #[schema(rename = "advanced")]
    Advanced,
}

/// OpenAPI schema for [`crate::domain::LocalizedCourse`].
///
/// Text fields are plain strings after localisation; `modules` keeps its
/// nested structure with every multilingual node resolved.
#[derive(ToSchema)]
#[schema(as = crate::domain::LocalizedCourse, rename_all = "camelCase")]
pub struct LocalizedCourseSchema {
    #[schema(example = "intro-ingenieria")]
    slug: String,
    #[schema(value_type = String, example = "Introduction to Engineering")]
    title: serde_json::Value,
    #[schema(value_type = String, example = "Exact Sciences")]
    category: serde_json::Value,
    #[schema(value_type = Option<String>, example = "Engineering")]
    career: serde_json::Value,
    difficulty: DifficultySchema,
    #[schema(value_type = String, example = "6 weeks")]
    duration: serde_json::Value,
    #[schema(value_type = String)]
    description: serde_json::Value,
    #[schema(value_type = Option<String>)]
    intro: serde_json::Value,
    #[schema(example = "https://cdn.example.invalid/ingenieria.png")]
    thumbnail_url: String,
    #[schema(value_type = Vec<String>)]
    tags: serde_json::Value,
    #[schema(value_type = Vec<Object>)]
    modules: serde_json::Value,
}

/// OpenAPI schema for [`crate::domain::ports::CategoryEntry`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::CategoryEntry)]
pub struct CategoryEntrySchema {
    #[schema(example = "ciencias-exactas")]
    category: String,
    course: LocalizedCourseSchema,
}

/// OpenAPI schema for [`crate::domain::ports::CategoryCourses`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::CategoryCourses)]
pub struct CategoryCoursesSchema {
    general: LocalizedCourseSchema,
    careers: Vec<LocalizedCourseSchema>,
}

/// OpenAPI schema for [`crate::domain::ports::CareerCourses`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::CareerCourses, rename_all = "camelCase")]
pub struct CareerCoursesSchema {
    category_course: LocalizedCourseSchema,
    career_course: LocalizedCourseSchema,
}

/// OpenAPI schema for [`crate::domain::ports::ConnectionStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ports::ConnectionStatus, rename_all = "camelCase")]
pub struct ConnectionStatusSchema {
    #[schema(example = "connected")]
    status: String,
    #[schema(example = 8)]
    total_documents: u64,
    sample: Vec<String>,
    message: Option<String>,
}
