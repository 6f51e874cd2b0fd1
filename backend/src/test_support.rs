//! Test utilities for the backend crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/`. Only
//! compiled for tests or with the `test-support` feature.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::Course;
use crate::domain::ports::{CourseRepository, CourseRepositoryError, UpsertOutcome};

/// In-memory [`CourseRepository`] keeping courses in insertion order.
///
/// # Examples
/// ```rust
/// use course_catalogue::test_support::InMemoryCourseRepository;
///
/// let repo = InMemoryCourseRepository::default();
/// assert!(repo.slugs().is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryCourseRepository {
    courses: Arc<Mutex<Vec<Course>>>,
    failure: Arc<Mutex<Option<CourseRepositoryError>>>,
}

impl InMemoryCourseRepository {
    /// Repository pre-populated with `courses`.
    #[must_use]
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: Arc::new(Mutex::new(courses)),
            failure: Arc::default(),
        }
    }

    /// Make every subsequent call fail with `error`.
    pub fn fail_with(&self, error: CourseRepositoryError) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = Some(error);
        }
    }

    /// Slugs currently stored, in insertion order.
    #[must_use]
    pub fn slugs(&self) -> Vec<String> {
        self.courses
            .lock()
            .map(|courses| courses.iter().map(|c| c.slug().to_owned()).collect())
            .unwrap_or_default()
    }

    /// Snapshot of every stored course.
    #[must_use]
    pub fn courses(&self) -> Vec<Course> {
        self.courses
            .lock()
            .map(|courses| courses.clone())
            .unwrap_or_default()
    }

    fn guard(&self) -> Result<MutexGuard<'_, Vec<Course>>, CourseRepositoryError> {
        if let Some(error) = self.failure.lock().ok().and_then(|failure| failure.clone()) {
            return Err(error);
        }
        self.courses
            .lock()
            .map_err(|_| CourseRepositoryError::query("in-memory course store poisoned"))
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        Ok(self.guard()?.clone())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self
            .guard()?
            .iter()
            .find(|course| course.slug() == slug)
            .cloned())
    }

    async fn upsert(&self, course: &Course) -> Result<UpsertOutcome, CourseRepositoryError> {
        let mut courses = self.guard()?;
        match courses.iter_mut().find(|stored| stored.slug() == course.slug()) {
            Some(stored) if stored == course => Ok(UpsertOutcome::Unchanged),
            Some(stored) => {
                *stored = course.clone();
                Ok(UpsertOutcome::Updated)
            }
            None => {
                courses.push(course.clone());
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    async fn count(&self) -> Result<u64, CourseRepositoryError> {
        let len = self.guard()?.len();
        u64::try_from(len).map_err(|err| CourseRepositoryError::query(err.to_string()))
    }
}
