//! Domain primitives, services, and ports.
//!
//! Purpose: model course documents and the category/career rules over them
//! independently of storage and transport. Adapters depend on this module,
//! never the other way round.
//!
//! Public surface:
//! - Error, ErrorCode: transport-agnostic failure payload.
//! - Course, CourseDraft, LocalizedCourse: the course entity and its views.
//! - Category, Career, CourseClassifier: closed classification.
//! - CourseCatalogueService, CourseSeeder: driving port implementations.

pub mod classification;
pub mod course;
mod course_catalogue_service;
mod course_seeding;
pub mod error;
pub mod ports;
mod slug;
pub mod trace_id;

pub use self::classification::{
    Career, Category, CourseClassifier, NormalizedCareer, NormalizedCategory, career_to_category,
    normalize_career, normalize_category,
};
pub use self::course::{
    Course, CourseDraft, CourseValidationError, Difficulty, LocalizedCourse, LocalizedValue,
};
pub use self::course_catalogue_service::CourseCatalogueService;
pub use self::course_seeding::CourseSeeder;
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use course_catalogue::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("course not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
