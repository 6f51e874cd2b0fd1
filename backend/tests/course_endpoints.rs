//! End-to-end HTTP tests for the course endpoints.
//!
//! Requests flow through the real handlers, catalogue service and seeder,
//! backed by the in-memory repository seeded from the bundled definitions.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use course_catalogue::Trace;
use course_catalogue::domain::ports::CourseRepositoryError;
use course_catalogue::domain::{CourseCatalogueService, CourseSeeder, TRACE_ID_HEADER};
use course_catalogue::inbound::http::courses::{CourseRouteOptions, configure};
use course_catalogue::inbound::http::state::HttpState;
use course_catalogue::seeding::seed_from_definitions;
use course_catalogue::test_support::InMemoryCourseRepository;

fn definitions_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/courses")
}

#[fixture]
fn repository() -> InMemoryCourseRepository {
    InMemoryCourseRepository::default()
}

async fn seeded(repository: &InMemoryCourseRepository) {
    let seeder = CourseSeeder::new(Arc::new(repository.clone()));
    let report = seed_from_definitions(&definitions_dir(), &seeder)
        .await
        .expect("fixtures seed");
    assert!(!report.has_failures(), "fixture seeding failed: {report:?}");
}

async fn get(
    repository: &InMemoryCourseRepository,
    options: CourseRouteOptions,
    request: test::TestRequest,
) -> (StatusCode, Option<String>, Value) {
    let shared = Arc::new(repository.clone());
    let state = HttpState::new(
        Arc::new(CourseCatalogueService::new(Arc::clone(&shared))),
        Arc::new(CourseSeeder::new(shared)),
    );
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(web::scope("/courses").configure(|cfg| configure(cfg, options))),
    )
    .await;
    let res = test::call_service(&app, request.to_request()).await;
    let status = res.status();
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = test::read_body_json(res).await;
    (status, trace_id, body)
}

fn slugs(courses: &Value) -> Vec<&str> {
    courses
        .as_array()
        .map(|items| items.iter().filter_map(|c| c["slug"].as_str()).collect())
        .unwrap_or_default()
}

#[rstest]
#[actix_web::test]
async fn resolving_a_career_returns_both_courses_in_english(repository: InMemoryCourseRepository) {
    seeded(&repository).await;

    let (status, trace_id, body) = get(
        &repository,
        CourseRouteOptions::default(),
        test::TestRequest::get().uri("/courses/resolve?career=Ingenier%C3%ADa&lang=en"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(trace_id.is_some());
    assert_eq!(body["categoryCourse"]["slug"], json!("intro-ciencias-exactas"));
    assert_eq!(body["categoryCourse"]["title"], json!("Exact Sciences"));
    assert_eq!(body["careerCourse"]["slug"], json!("intro-ingenieria"));
    assert_eq!(body["careerCourse"]["title"], json!("Introduction to Engineering"));
    assert_eq!(
        body["careerCourse"]["intro"],
        json!("Welcome to Introduction to Engineering.")
    );
}

#[rstest]
#[actix_web::test]
async fn categories_list_the_first_course_of_each(repository: InMemoryCourseRepository) {
    seeded(&repository).await;

    let (status, _, body) = get(
        &repository,
        CourseRouteOptions::default(),
        test::TestRequest::get().uri("/courses/categories?lang=fr"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "category": "ciencias-exactas", "course": body[0]["course"].clone() },
            { "category": "ciencias-humanas", "course": body[1]["course"].clone() },
        ])
    );
    assert_eq!(body[0]["course"]["slug"], json!("intro-ingenieria"));
    assert_eq!(body[1]["course"]["slug"], json!("intro-psicologia"));
    assert_eq!(body[1]["course"]["category"], json!("Sciences humaines"));
}

#[rstest]
#[actix_web::test]
async fn category_courses_pair_the_general_course_with_its_careers(
    repository: InMemoryCourseRepository,
) {
    seeded(&repository).await;

    let (status, _, body) = get(
        &repository,
        CourseRouteOptions::default(),
        test::TestRequest::get().uri("/courses/categories/ciencias-humanas?lang=de"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["general"]["slug"], json!("intro-ciencias-humanas"));
    assert_eq!(body["general"]["title"], json!("Humanwissenschaften"));
    let mut careers = slugs(&body["careers"]);
    careers.sort_unstable();
    assert_eq!(
        careers,
        ["intro-filosofia", "intro-psicologia", "intro-trabajo-social"]
    );
}

#[rstest]
#[actix_web::test]
async fn missing_general_course_is_not_found(repository: InMemoryCourseRepository) {
    let (status, _, body) = get(
        &repository,
        CourseRouteOptions::default(),
        test::TestRequest::get().uri("/courses/categories/ciencias-humanas"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], json!("not_found"));
    assert_eq!(body["message"], json!("category general course not found"));
}

#[rstest]
#[case("es", "Introducción a la Filosofía")]
#[case("it", "Introduzione alla filosofia")]
#[case("pt", "Introducción a la Filosofía")]
#[actix_web::test]
async fn courses_are_localized_by_slug(
    repository: InMemoryCourseRepository,
    #[case] lang: &str,
    #[case] title: &str,
) {
    seeded(&repository).await;

    let (status, _, body) = get(
        &repository,
        CourseRouteOptions::default(),
        test::TestRequest::get().uri(&format!("/courses/intro-filosofia?lang={lang}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], json!(title));
    assert!(body["modules"][0]["lessons"][0]["title"].is_string());
}

#[rstest]
#[case("es")]
#[case("en")]
#[case("de")]
#[actix_web::test]
async fn unknown_slugs_are_not_found_in_every_language(
    repository: InMemoryCourseRepository,
    #[case] lang: &str,
) {
    seeded(&repository).await;

    let (status, trace_id, body) = get(
        &repository,
        CourseRouteOptions::default(),
        test::TestRequest::get().uri(&format!("/courses/unknown-slug?lang={lang}")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("course not found"));
    assert_eq!(body["traceId"].as_str(), trace_id.as_deref());
}

#[rstest]
#[actix_web::test]
async fn unreachable_store_is_service_unavailable(repository: InMemoryCourseRepository) {
    repository.fail_with(CourseRepositoryError::connection("connection refused"));

    let (status, _, body) = get(
        &repository,
        CourseRouteOptions::default(),
        test::TestRequest::get().uri("/courses/categories"),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], json!("service_unavailable"));
}

#[rstest]
#[actix_web::test]
async fn seed_endpoint_updates_existing_courses(repository: InMemoryCourseRepository) {
    seeded(&repository).await;
    let options = CourseRouteOptions {
        seed_endpoint: true,
        ..CourseRouteOptions::default()
    };
    let document = json!({
        "id": "intro-filosofia",
        "title": { "es": "Filosofía para principiantes", "en": "Philosophy for beginners" },
        "branch": "Ciencias Humanas",
        "career": "Filosofía",
        "difficulty": "beginner",
        "duration": "3 semanas",
        "description": "Curso breve.",
        "thumbnail_url": "https://cdn.example.invalid/thumbnails/intro-filosofia.png",
        "modules": []
    });

    let (status, _, body) = get(
        &repository,
        options,
        test::TestRequest::post()
            .uri("/courses/seed")
            .set_json(json!({ "courses": [document, { "title": "sin slug" }] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "attempted": 1, "succeeded": 1, "failed": 0, "skipped": 1 })
    );
    assert_eq!(repository.slugs().len(), 8);

    let (_, _, course) = get(
        &repository,
        options,
        test::TestRequest::get().uri("/courses/intro-filosofia?lang=en"),
    )
    .await;
    assert_eq!(course["title"], json!("Philosophy for beginners"));
}

#[rstest]
#[actix_web::test]
async fn debug_connection_reports_a_sample(repository: InMemoryCourseRepository) {
    seeded(&repository).await;

    let (status, _, body) = get(
        &repository,
        CourseRouteOptions {
            dev_endpoints: true,
            ..CourseRouteOptions::default()
        },
        test::TestRequest::get().uri("/courses/debug/connection"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("connected"));
    assert_eq!(body["totalDocuments"], json!(8));
    assert_eq!(
        body["sample"],
        json!(["intro-ingenieria", "intro-ciencias-exactas", "intro-arquitectura"])
    );
}
