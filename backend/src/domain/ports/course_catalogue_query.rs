//! Driving port for catalogue reads.
//!
//! Every result is already localized into the requested language, so
//! inbound adapters only serialise what they receive.

use async_trait::async_trait;
use multilingual::Language;
use serde::Serialize;
use serde_json::json;

use crate::domain::{Category, Error, LocalizedCourse};

/// First course seen for a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEntry {
    /// Category the course belongs to.
    pub category: Category,
    /// First course stored under that category.
    pub course: LocalizedCourse,
}

/// A category's general course plus whichever career courses exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCourses {
    /// The course with no career.
    pub general: LocalizedCourse,
    /// One course per career of the category, in store order.
    pub careers: Vec<LocalizedCourse>,
}

/// A career's course paired with its category's general course.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerCourses {
    /// General course of the career's category.
    pub category_course: LocalizedCourse,
    /// Course for the career itself.
    pub career_course: LocalizedCourse,
}

/// Domain use-case port for catalogue queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCatalogueQuery: Send + Sync {
    /// One entry per recognised category, in first-seen order.
    async fn list_categories(&self, language: Language) -> Result<Vec<CategoryEntry>, Error>;

    /// General and career courses of `category`.
    async fn category_courses(
        &self,
        category: Category,
        language: Language,
    ) -> Result<CategoryCourses, Error>;

    /// Courses for a free-text career name.
    async fn resolve_career(&self, career: &str, language: Language)
    -> Result<CareerCourses, Error>;

    /// A single course by slug.
    async fn course_by_slug(&self, slug: &str, language: Language)
    -> Result<LocalizedCourse, Error>;

    /// Store reachability and a small sample of slugs.
    async fn connection_status(&self) -> Result<ConnectionStatus, Error>;
}

/// Diagnostics snapshot returned by the connection check.
///
/// `status` is `connected` when the store answered and `error` otherwise;
/// the failure text is carried in `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatus {
    /// `connected` or `error`.
    pub status: String,
    /// Number of stored courses.
    pub total_documents: u64,
    /// Up to three stored slugs.
    pub sample: Vec<String>,
    /// Failure text when `status` is `error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Fixture query over an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCourseCatalogueQuery;

#[async_trait]
impl CourseCatalogueQuery for FixtureCourseCatalogueQuery {
    async fn list_categories(&self, _language: Language) -> Result<Vec<CategoryEntry>, Error> {
        Ok(Vec::new())
    }

    async fn category_courses(
        &self,
        category: Category,
        _language: Language,
    ) -> Result<CategoryCourses, Error> {
        Err(Error::not_found("category general course not found")
            .with_details(json!({ "category": category.slug() })))
    }

    async fn resolve_career(
        &self,
        career: &str,
        _language: Language,
    ) -> Result<CareerCourses, Error> {
        Err(Error::not_found("career not supported").with_details(json!({ "career": career })))
    }

    async fn course_by_slug(
        &self,
        slug: &str,
        _language: Language,
    ) -> Result<LocalizedCourse, Error> {
        Err(Error::not_found("course not found").with_details(json!({ "slug": slug })))
    }

    async fn connection_status(&self) -> Result<ConnectionStatus, Error> {
        Ok(ConnectionStatus {
            status: "connected".to_owned(),
            total_documents: 0,
            sample: Vec::new(),
            message: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[tokio::test]
    async fn fixture_reports_missing_courses() {
        let query = FixtureCourseCatalogueQuery;
        let err = query
            .course_by_slug("unknown-slug", Language::En)
            .await
            .expect_err("empty catalogue");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert!(
            query
                .list_categories(Language::Es)
                .await
                .expect("categories")
                .is_empty()
        );
    }
}
