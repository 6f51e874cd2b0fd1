//! Typed HTTP client for the course catalogue API.
//!
//! The client sends the caller's locale as a supported language code and
//! re-resolves every payload through [`multilingual::FieldResolver`] before
//! decoding, so it accepts both localized responses and raw multilingual
//! documents.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use course_client::CourseClient;
//!
//! # async fn run() -> Result<(), course_client::ClientError> {
//! let client = CourseClient::new("http://localhost:8080", Duration::from_secs(5))?;
//! let courses = client.courses_for_career("Ingeniería", Some("en-US")).await?;
//! assert_eq!(courses.career_course.slug, "intro-ingenieria");
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod model;

pub use client::{CourseClient, language_for};
pub use error::ClientError;
pub use model::{CareerCourses, CategoryCourses, CategoryEntry, ContentType, Course, Lesson, Module};
