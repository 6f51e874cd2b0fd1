//! Catalogue query service.
//!
//! Answers the category, career, and slug lookups over the course
//! repository and localizes every returned course.

use std::sync::Arc;

use async_trait::async_trait;
use multilingual::{FieldResolver, Language};
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::{
    CareerCourses, CategoryCourses, CategoryEntry, ConnectionStatus, CourseCatalogueQuery,
    CourseRepository, CourseRepositoryError,
};
use crate::domain::{
    Category, Course, CourseClassifier, Error, LocalizedCourse, NormalizedCareer,
    career_to_category, normalize_career,
};

const SAMPLE_SIZE: usize = 3;

/// Catalogue service implementing [`CourseCatalogueQuery`].
#[derive(Clone)]
pub struct CourseCatalogueService<R> {
    repository: Arc<R>,
    resolver: FieldResolver,
    classifier: CourseClassifier,
}

impl<R> CourseCatalogueService<R> {
    /// Create a service using the default fallback chain.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_resolver(repository, FieldResolver::default())
    }

    /// Create a service with an explicit resolver.
    pub fn with_resolver(repository: Arc<R>, resolver: FieldResolver) -> Self {
        Self {
            repository,
            classifier: CourseClassifier::new(resolver.clone()),
            resolver,
        }
    }
}

impl<R> CourseCatalogueService<R>
where
    R: CourseRepository,
{
    fn map_repository_error(error: CourseRepositoryError) -> Error {
        match error {
            CourseRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("course store unavailable: {message}"))
            }
            CourseRepositoryError::Query { message } => {
                Error::internal(format!("course store error: {message}"))
            }
        }
    }

    async fn all_courses(&self) -> Result<Vec<Course>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(Self::map_repository_error)
    }

    fn localize(&self, course: &Course, language: Language) -> LocalizedCourse {
        course.localize(&self.resolver, language)
    }

    fn general_course<'a>(&self, courses: &'a [Course], category: Category) -> Option<&'a Course> {
        courses
            .iter()
            .find(|course| self.classifier.is_general_course_of(course, category))
    }
}

#[async_trait]
impl<R> CourseCatalogueQuery for CourseCatalogueService<R>
where
    R: CourseRepository,
{
    async fn list_categories(&self, language: Language) -> Result<Vec<CategoryEntry>, Error> {
        let courses = self.all_courses().await?;
        let mut entries: Vec<CategoryEntry> = Vec::new();
        for course in &courses {
            let Some(category) = self
                .classifier
                .category_of(course)
                .and_then(|normalized| normalized.known())
            else {
                debug!(slug = course.slug(), "course has no recognised category");
                continue;
            };
            if entries.iter().any(|entry| entry.category == category) {
                continue;
            }
            entries.push(CategoryEntry {
                category,
                course: self.localize(course, language),
            });
        }
        debug!(count = entries.len(), %language, "listed categories");
        Ok(entries)
    }

    async fn category_courses(
        &self,
        category: Category,
        language: Language,
    ) -> Result<CategoryCourses, Error> {
        let courses = self.all_courses().await?;
        let Some(general) = self.general_course(&courses, category) else {
            warn!(%category, "category general course missing");
            return Err(Error::not_found("category general course not found")
                .with_details(json!({ "category": category.slug() })));
        };
        let careers = category.careers();
        let career_courses = courses
            .iter()
            .filter(|course| {
                careers
                    .iter()
                    .any(|career| self.classifier.is_career_course_of(course, *career))
            })
            .map(|course| self.localize(course, language))
            .collect::<Vec<_>>();
        debug!(%category, careers = career_courses.len(), "resolved category courses");
        Ok(CategoryCourses {
            general: self.localize(general, language),
            careers: career_courses,
        })
    }

    async fn resolve_career(
        &self,
        career: &str,
        language: Language,
    ) -> Result<CareerCourses, Error> {
        let normalized = normalize_career(career);
        let (NormalizedCareer::Known(known), Some(category)) =
            (&normalized, career_to_category(normalized.as_str()))
        else {
            debug!(career, "career not supported");
            return Err(Error::not_found("career not supported")
                .with_details(json!({ "career": normalized.as_str() })));
        };
        let known = *known;

        let courses = self.all_courses().await?;
        let general = self.general_course(&courses, category);
        let career_course = courses
            .iter()
            .find(|course| self.classifier.is_career_course_of(course, known));
        match (general, career_course) {
            (Some(general), Some(career_course)) => Ok(CareerCourses {
                category_course: self.localize(general, language),
                career_course: self.localize(career_course, language),
            }),
            (general, career_course) => {
                warn!(
                    career = %known,
                    %category,
                    general_found = general.is_some(),
                    career_found = career_course.is_some(),
                    "associated courses missing"
                );
                Err(Error::not_found("associated courses not found").with_details(json!({
                    "career": known.slug(),
                    "category": category.slug(),
                })))
            }
        }
    }

    async fn course_by_slug(
        &self,
        slug: &str,
        language: Language,
    ) -> Result<LocalizedCourse, Error> {
        let course = self
            .repository
            .find_by_slug(slug)
            .await
            .map_err(Self::map_repository_error)?;
        course.map_or_else(
            || {
                debug!(slug, "course not found");
                Err(Error::not_found("course not found").with_details(json!({ "slug": slug })))
            },
            |course| Ok(self.localize(&course, language)),
        )
    }

    async fn connection_status(&self) -> Result<ConnectionStatus, Error> {
        let probe = async {
            let total = self.repository.count().await?;
            let sample = self
                .repository
                .find_all()
                .await?
                .iter()
                .take(SAMPLE_SIZE)
                .map(|course| course.slug().to_owned())
                .collect();
            Ok::<_, CourseRepositoryError>((total, sample))
        };
        match probe.await {
            Ok((total_documents, sample)) => Ok(ConnectionStatus {
                status: "connected".to_owned(),
                total_documents,
                sample,
                message: (total_documents == 0).then(|| "course store is empty".to_owned()),
            }),
            Err(error) => {
                warn!(%error, "course store probe failed");
                Ok(ConnectionStatus {
                    status: "error".to_owned(),
                    total_documents: 0,
                    sample: Vec::new(),
                    message: Some(error.to_string()),
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "course_catalogue_service_tests.rs"]
mod tests;
