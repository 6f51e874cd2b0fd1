//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod course_catalogue_query;
mod course_repository;
mod course_seeding_command;

#[cfg(test)]
pub use course_catalogue_query::MockCourseCatalogueQuery;
pub use course_catalogue_query::{
    CareerCourses, CategoryCourses, CategoryEntry, ConnectionStatus, CourseCatalogueQuery,
    FixtureCourseCatalogueQuery,
};
#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::{
    CourseRepository, CourseRepositoryError, FixtureCourseRepository, UpsertOutcome,
};
#[cfg(test)]
pub use course_seeding_command::MockCourseSeedingCommand;
pub use course_seeding_command::{
    BatchItemError, CourseSeedingCommand, FixtureCourseSeedingCommand, SeedDocument, SeedItem,
    SeedItemStatus, SeedReport,
};
