//! PostgreSQL-backed `CourseRepository` using Diesel.
//!
//! Upserts run in a transaction that locks the existing row by slug, so a
//! concurrent seeder cannot interleave between the comparison and the write.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::Course;
use crate::domain::ports::{CourseRepository, CourseRepositoryError, UpsertOutcome};

use super::models::{CourseChangeset, CourseRow, NewCourseRow};
use super::pool::{DbPool, PoolError};
use super::schema::courses;

/// Diesel implementation of [`CourseRepository`].
#[derive(Clone)]
pub struct DieselCourseRepository {
    pool: DbPool,
}

impl DieselCourseRepository {
    /// Create a repository over `pool`.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CourseRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            CourseRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> CourseRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => CourseRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => CourseRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            CourseRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            CourseRepositoryError::query("course slug already stored")
        }
        DieselError::DeserializationError(_) => {
            CourseRepositoryError::query("stored course could not be decoded")
        }
        _ => CourseRepositoryError::query("database error"),
    }
}

fn row_to_course(row: CourseRow) -> Result<Course, CourseRepositoryError> {
    let slug = row.slug.clone();
    Course::try_from(row).map_err(|error| {
        warn!(%slug, %error, "stored course failed validation");
        CourseRepositoryError::query(format!("stored course {slug} is invalid: {error}"))
    })
}

#[async_trait]
impl CourseRepository for DieselCourseRepository {
    async fn find_all(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CourseRow> = courses::table
            .select(CourseRow::as_select())
            .order_by((courses::created_at.asc(), courses::slug.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_course).collect()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Course>, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CourseRow> = courses::table
            .filter(courses::slug.eq(slug))
            .select(CourseRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_course).transpose()
    }

    async fn upsert(&self, course: &Course) -> Result<UpsertOutcome, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| {
            async move {
                let existing: Option<CourseRow> = courses::table
                    .filter(courses::slug.eq(course.slug()))
                    .select(CourseRow::as_select())
                    .for_update()
                    .first(conn)
                    .await
                    .optional()?;

                let Some(existing) = existing else {
                    diesel::insert_into(courses::table)
                        .values(&NewCourseRow::from_course(Uuid::new_v4(), course))
                        .execute(conn)
                        .await?;
                    return Ok(UpsertOutcome::Inserted);
                };

                if Course::try_from(existing).is_ok_and(|stored| &stored == course) {
                    return Ok(UpsertOutcome::Unchanged);
                }

                diesel::update(courses::table.filter(courses::slug.eq(course.slug())))
                    .set(&CourseChangeset::from_course(course, Utc::now()))
                    .execute(conn)
                    .await?;
                Ok(UpsertOutcome::Updated)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn count(&self) -> Result<u64, CourseRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total: i64 = courses::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        u64::try_from(total).map_err(|err| CourseRepositoryError::query(err.to_string()))
    }
}
