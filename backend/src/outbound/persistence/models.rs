//! Diesel row types for the `courses` table.
//!
//! Internal to the persistence adapter; conversions to and from the domain
//! [`Course`] live here so the repository only moves rows around.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{Course, CourseDraft, CourseValidationError, LocalizedValue};

use super::schema::courses;

/// Document columns read from `courses`; storage identity and timestamps
/// are not selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CourseRow {
    pub slug: String,
    pub title: Value,
    pub category: Value,
    pub career: Value,
    pub difficulty: String,
    pub duration: Value,
    pub description: Value,
    pub intro: Value,
    pub thumbnail_url: String,
    pub tags: Value,
    pub modules: Value,
}

impl TryFrom<CourseRow> for Course {
    type Error = CourseValidationError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        Self::try_from(CourseDraft {
            slug: Some(row.slug),
            title: LocalizedValue::new(row.title),
            category: LocalizedValue::new(row.category),
            career: LocalizedValue::new(row.career),
            difficulty: Some(row.difficulty),
            duration: LocalizedValue::new(row.duration),
            description: LocalizedValue::new(row.description),
            intro: LocalizedValue::new(row.intro),
            thumbnail_url: Some(row.thumbnail_url),
            tags: LocalizedValue::new(row.tags),
            modules: LocalizedValue::new(row.modules),
        })
    }
}

/// Insertable course row.
#[derive(Debug, Insertable)]
#[diesel(table_name = courses)]
pub(crate) struct NewCourseRow<'a> {
    pub id: Uuid,
    pub slug: &'a str,
    pub title: &'a Value,
    pub category: &'a Value,
    pub career: &'a Value,
    pub difficulty: &'a str,
    pub duration: &'a Value,
    pub description: &'a Value,
    pub intro: &'a Value,
    pub thumbnail_url: &'a str,
    pub tags: &'a Value,
    pub modules: &'a Value,
}

impl<'a> NewCourseRow<'a> {
    pub(crate) fn from_course(id: Uuid, course: &'a Course) -> Self {
        Self {
            id,
            slug: course.slug(),
            title: course.title().as_value(),
            category: course.category().as_value(),
            career: course.career().as_value(),
            difficulty: course.difficulty().as_str(),
            duration: course.duration().as_value(),
            description: course.description().as_value(),
            intro: course.intro().as_value(),
            thumbnail_url: course.thumbnail_url(),
            tags: course.tags().as_value(),
            modules: course.modules().as_value(),
        }
    }
}

/// Replacement of every document column of an existing row.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = courses)]
pub(crate) struct CourseChangeset<'a> {
    pub title: &'a Value,
    pub category: &'a Value,
    pub career: &'a Value,
    pub difficulty: &'a str,
    pub duration: &'a Value,
    pub description: &'a Value,
    pub intro: &'a Value,
    pub thumbnail_url: &'a str,
    pub tags: &'a Value,
    pub modules: &'a Value,
    pub updated_at: DateTime<Utc>,
}

impl<'a> CourseChangeset<'a> {
    pub(crate) fn from_course(course: &'a Course, updated_at: DateTime<Utc>) -> Self {
        Self {
            title: course.title().as_value(),
            category: course.category().as_value(),
            career: course.career().as_value(),
            difficulty: course.difficulty().as_str(),
            duration: course.duration().as_value(),
            description: course.description().as_value(),
            intro: course.intro().as_value(),
            thumbnail_url: course.thumbnail_url(),
            tags: course.tags().as_value(),
            modules: course.modules().as_value(),
            updated_at,
        }
    }
}
