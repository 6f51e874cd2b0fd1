//! Integration tests for `DieselCourseRepository` against embedded PostgreSQL.
//!
//! Each test starts its own cluster through `pg-embed-setup-unpriv`, migrates
//! a fresh database, and talks to it through the async pool.

use course_catalogue::domain::Course;
use course_catalogue::domain::ports::{CourseRepository, UpsertOutcome};
use course_catalogue::outbound::persistence::{DbPool, DieselCourseRepository, PoolConfig};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use serde_json::json;
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::{
    connect, format_postgres_error, handle_cluster_setup_failure, migrate_schema, reset_database,
};

const TEST_DB: &str = "diesel_course_repo_test";

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    repository: DieselCourseRepository,
    database_url: String,
}

impl TestContext {
    fn updated_at(&self, slug: &str) -> String {
        let mut client = connect(&self.database_url).expect("connect for assertions");
        client
            .query_one(
                "SELECT updated_at::text FROM courses WHERE slug = $1",
                &[&slug],
            )
            .map_err(|err| format_postgres_error(&err))
            .expect("stored row")
            .get(0)
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = test_cluster()?;
    reset_database(&cluster, TEST_DB)?;
    let database_url = cluster.connection().database_url(TEST_DB);
    migrate_schema(&database_url)?;

    let config = PoolConfig::new(&database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(async { DbPool::new(config).await })
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        repository: DieselCourseRepository::new(pool),
        database_url,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn course(slug: &str, description: &str) -> Course {
    serde_json::from_value(json!({
        "id": slug,
        "title": { "fr": "Introduction", "es": "Introducción", "en": "Introduction" },
        "branch": "Ciencias Exactas",
        "career": { "es": "Matemáticas", "en": "Mathematics" },
        "difficulty": "beginner",
        "duration": "4 semanas",
        "description": description,
        "thumbnail_url": "https://cdn.example.invalid/course.png",
        "tags": { "es": ["álgebra"], "en": ["algebra"] },
        "modules": [{ "title": "Límites", "duration": "1h", "lessons": [] }]
    }))
    .expect("valid course")
}

#[rstest]
fn upsert_reports_inserted_unchanged_and_updated(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: upsert_reports_inserted_unchanged_and_updated skipped");
        return;
    };
    let repository = context.repository.clone();
    let original = course("algebra-lineal", "Vectores y matrices");

    let first = context
        .runtime
        .block_on(async { repository.upsert(&original).await })
        .expect("insert course");
    assert_eq!(first, UpsertOutcome::Inserted);
    let inserted_at = context.updated_at("algebra-lineal");

    let second = context
        .runtime
        .block_on(async { repository.upsert(&original).await })
        .expect("re-upsert course");
    assert_eq!(second, UpsertOutcome::Unchanged);
    assert_eq!(context.updated_at("algebra-lineal"), inserted_at);

    let revised = course("algebra-lineal", "Vectores, matrices y determinantes");
    let third = context
        .runtime
        .block_on(async { repository.upsert(&revised).await })
        .expect("update course");
    assert_eq!(third, UpsertOutcome::Updated);
    assert_ne!(context.updated_at("algebra-lineal"), inserted_at);

    let stored = context
        .runtime
        .block_on(async { repository.find_by_slug("algebra-lineal").await })
        .expect("fetch course")
        .expect("course stored");
    assert_eq!(stored, revised);
    let total = context
        .runtime
        .block_on(async { repository.count().await })
        .expect("count courses");
    assert_eq!(total, 1);
}

#[rstest]
fn find_all_lists_courses_in_insertion_order(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: find_all_lists_courses_in_insertion_order skipped");
        return;
    };
    let repository = context.repository.clone();

    for slug in ["zoologia", "arquitectura", "medicina"] {
        let outcome = context
            .runtime
            .block_on(async { repository.upsert(&course(slug, "Descripción")).await })
            .expect("insert course");
        assert_eq!(outcome, UpsertOutcome::Inserted);
    }
    context
        .runtime
        .block_on(async {
            repository
                .upsert(&course("zoologia", "Descripción revisada"))
                .await
        })
        .expect("update course");

    let slugs: Vec<String> = context
        .runtime
        .block_on(async { repository.find_all().await })
        .expect("list courses")
        .iter()
        .map(|course| course.slug().to_owned())
        .collect();
    assert_eq!(slugs, ["zoologia", "arquitectura", "medicina"]);
}

#[rstest]
fn localized_fields_keep_their_language_order(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: localized_fields_keep_their_language_order skipped");
        return;
    };
    let repository = context.repository.clone();
    let original = course("geometria", "Figuras y espacios");

    context
        .runtime
        .block_on(async { repository.upsert(&original).await })
        .expect("insert course");
    let stored = context
        .runtime
        .block_on(async { repository.find_by_slug("geometria").await })
        .expect("fetch course")
        .expect("course stored");

    let languages: Vec<&str> = stored
        .title()
        .as_value()
        .as_object()
        .expect("multilingual title")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(languages, ["fr", "es", "en"]);
    assert_eq!(
        stored.tags().as_value(),
        &json!({ "es": ["álgebra"], "en": ["algebra"] })
    );
    assert_eq!(stored, original);
}

#[rstest]
fn missing_slugs_are_not_found(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: missing_slugs_are_not_found skipped");
        return;
    };
    let repository = context.repository.clone();

    let found = context
        .runtime
        .block_on(async { repository.find_by_slug("no-existe").await })
        .expect("query course");
    assert!(found.is_none());
    let total = context
        .runtime
        .block_on(async { repository.count().await })
        .expect("count courses");
    assert_eq!(total, 0);
}
