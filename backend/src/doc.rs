//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the course and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`], so domain types
//! stay free of utoipa derives. The document backs Swagger UI in debug
//! builds and is exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::courses::{SeedRequest, SeedResponse};
use crate::inbound::http::schemas::{
    CareerCoursesSchema, CategoryCoursesSchema, CategoryEntrySchema, ConnectionStatusSchema,
    DifficultySchema, ErrorCodeSchema, ErrorSchema, LocalizedCourseSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course catalogue API",
        description = "Multilingual course catalogue with career recommendations.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::courses::list_categories,
        crate::inbound::http::courses::category_courses,
        crate::inbound::http::courses::resolve_career,
        crate::inbound::http::courses::debug_connection,
        crate::inbound::http::courses::course_by_slug,
        crate::inbound::http::courses::seed_courses,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        DifficultySchema,
        LocalizedCourseSchema,
        CategoryEntrySchema,
        CategoryCoursesSchema,
        CareerCoursesSchema,
        ConnectionStatusSchema,
        SeedRequest,
        SeedResponse,
    )),
    tags(
        (name = "courses", description = "Course catalogue and career recommendations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const COURSE_SCHEMA_NAME: &str = "crate.domain.LocalizedCourse";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case(ERROR_SCHEMA_NAME, "code")]
    #[case(ERROR_SCHEMA_NAME, "traceId")]
    #[case(COURSE_SCHEMA_NAME, "thumbnailUrl")]
    #[case(COURSE_SCHEMA_NAME, "modules")]
    fn schemas_use_wire_field_names(#[case] schema_name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(schema_name).expect("schema registered");
        assert_object_schema_has_field(schema, field);
    }

    #[rstest]
    #[case("/courses/categories")]
    #[case("/courses/categories/{category}")]
    #[case("/courses/resolve")]
    #[case("/courses/{slug}")]
    #[case("/courses/seed")]
    #[case("/health/ready")]
    fn course_and_health_paths_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
