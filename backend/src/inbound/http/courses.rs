//! Course catalogue endpoints.
//!
//! ```text
//! GET  /courses/categories
//! GET  /courses/categories/{category}
//! GET  /courses/resolve?career=<name>
//! GET  /courses/debug/connection   (dev endpoints only)
//! GET  /courses/{slug}
//! POST /courses/seed               (seed endpoint only)
//! ```
//!
//! Every read endpoint accepts `lang`; absent or unknown codes fall back to
//! Spanish.

use actix_web::{HttpResponse, get, post, web};
use multilingual::Language;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{SeedDocument, SeedReport};
use crate::domain::{Category, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    CareerCoursesSchema, CategoryCoursesSchema, CategoryEntrySchema, ConnectionStatusSchema,
    ErrorSchema, LocalizedCourseSchema,
};
use crate::inbound::http::state::HttpState;

/// Optional endpoints, disabled unless switched on in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseRouteOptions {
    /// Register `POST /courses/seed`.
    pub seed_endpoint: bool,
    /// Register `GET /courses/debug/connection`.
    pub dev_endpoints: bool,
}

/// Register the course routes under `/courses`.
///
/// Fixed segments are registered before `/{slug}` so they take precedence.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use course_catalogue::inbound::http::courses::{CourseRouteOptions, configure};
///
/// let app = App::new().service(
///     web::scope("/courses").configure(|cfg| configure(cfg, CourseRouteOptions::default())),
/// );
/// ```
pub fn configure(cfg: &mut web::ServiceConfig, options: CourseRouteOptions) {
    cfg.service(list_categories)
        .service(category_courses)
        .service(resolve_career);
    if options.dev_endpoints {
        cfg.service(debug_connection);
    }
    cfg.service(course_by_slug);
    if options.seed_endpoint {
        cfg.service(seed_courses);
    }
}

/// Language selection shared by the read endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LangQuery {
    /// Two-letter language code (`es`, `en`, `fr`, `it`, `de`).
    #[param(example = "en")]
    pub lang: Option<String>,
}

impl LangQuery {
    fn language(&self) -> Language {
        Language::from_query(self.lang.as_deref())
    }
}

/// Query parameters of `GET /courses/resolve`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveQuery {
    /// Career name, accented or not.
    #[param(example = "Ingeniería")]
    pub career: Option<String>,
    /// Two-letter language code.
    #[param(example = "en")]
    pub lang: Option<String>,
}

/// Body of `POST /courses/seed`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SeedRequest {
    /// Raw course documents; entries without `id`/`slug` are skipped.
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub courses: Vec<Value>,
}

/// Counters returned by `POST /courses/seed`.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct SeedResponse {
    /// Documents that declared a slug.
    pub attempted: usize,
    /// Documents stored or already up to date.
    pub succeeded: usize,
    /// Documents rejected by validation or storage.
    pub failed: usize,
    /// Documents without a slug.
    pub skipped: usize,
}

impl From<&SeedReport> for SeedResponse {
    fn from(report: &SeedReport) -> Self {
        Self {
            attempted: report.attempted,
            succeeded: report.succeeded,
            failed: report.failed,
            skipped: report.skipped,
        }
    }
}

/// List one course per category.
#[utoipa::path(
    get,
    path = "/courses/categories",
    params(LangQuery),
    responses(
        (status = 200, description = "First course of each category", body = [CategoryEntrySchema]),
        (status = 503, description = "Course store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
    query: web::Query<LangQuery>,
) -> ApiResult<HttpResponse> {
    let entries = state.catalogue.list_categories(query.language()).await?;
    Ok(HttpResponse::Ok().json(entries))
}

/// General and career courses of a category.
#[utoipa::path(
    get,
    path = "/courses/categories/{category}",
    params(
        ("category" = String, Path, description = "`ciencias-exactas` or `ciencias-humanas`"),
        LangQuery
    ),
    responses(
        (status = 200, description = "Category courses", body = CategoryCoursesSchema),
        (status = 404, description = "Unknown category or missing general course", body = ErrorSchema),
        (status = 503, description = "Course store unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "getCategoryCourses"
)]
#[get("/categories/{category}")]
pub async fn category_courses(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LangQuery>,
) -> ApiResult<HttpResponse> {
    let Some(category) = Category::from_slug(path.as_str()) else {
        return Err(Error::not_found("invalid category")
            .with_details(serde_json::json!({ "category": path.as_str() })));
    };
    let courses = state
        .catalogue
        .category_courses(category, query.language())
        .await?;
    Ok(HttpResponse::Ok().json(courses))
}

/// Courses for a career together with its category's general course.
#[utoipa::path(
    get,
    path = "/courses/resolve",
    params(ResolveQuery),
    responses(
        (status = 200, description = "Career and category courses", body = CareerCoursesSchema),
        (status = 404, description = "Unsupported career or missing courses", body = ErrorSchema),
        (status = 503, description = "Course store unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "resolveCareer"
)]
#[get("/resolve")]
pub async fn resolve_career(
    state: web::Data<HttpState>,
    query: web::Query<ResolveQuery>,
) -> ApiResult<HttpResponse> {
    let ResolveQuery { career, lang } = query.into_inner();
    let Some(career) = career.filter(|career| !career.trim().is_empty()) else {
        return Err(Error::not_found("career not supported"));
    };
    let courses = state
        .catalogue
        .resolve_career(&career, Language::from_query(lang.as_deref()))
        .await?;
    Ok(HttpResponse::Ok().json(courses))
}

/// Store diagnostics for development.
#[utoipa::path(
    get,
    path = "/courses/debug/connection",
    responses(
        (status = 200, description = "Store status", body = ConnectionStatusSchema)
    ),
    tags = ["courses"],
    operation_id = "debugConnection"
)]
#[get("/debug/connection")]
pub async fn debug_connection(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let status = state.catalogue.connection_status().await?;
    Ok(HttpResponse::Ok().json(status))
}

/// A single course by slug.
#[utoipa::path(
    get,
    path = "/courses/{slug}",
    params(
        ("slug" = String, Path, description = "Course slug", example = "intro-ingenieria"),
        LangQuery
    ),
    responses(
        (status = 200, description = "Localized course", body = LocalizedCourseSchema),
        (status = 404, description = "Unknown slug", body = ErrorSchema),
        (status = 503, description = "Course store unavailable", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/{slug}")]
pub async fn course_by_slug(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LangQuery>,
) -> ApiResult<HttpResponse> {
    let course = state
        .catalogue
        .course_by_slug(path.as_str(), query.language())
        .await?;
    Ok(HttpResponse::Ok().json(course))
}

/// Upsert a batch of course documents.
#[utoipa::path(
    post,
    path = "/courses/seed",
    request_body = SeedRequest,
    responses(
        (status = 200, description = "Seeding counters", body = SeedResponse),
        (status = 400, description = "Malformed body", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "seedCourses"
)]
#[post("/seed")]
pub async fn seed_courses(
    state: web::Data<HttpState>,
    payload: web::Json<SeedRequest>,
) -> ApiResult<HttpResponse> {
    let documents = payload
        .into_inner()
        .courses
        .into_iter()
        .enumerate()
        .map(|(index, document)| SeedDocument::new(format!("request[{index}]"), document))
        .collect();
    let report = state.seeding.seed(documents).await?;
    Ok(HttpResponse::Ok().json(SeedResponse::from(&report)))
}

#[cfg(test)]
#[path = "courses_tests.rs"]
mod tests;
