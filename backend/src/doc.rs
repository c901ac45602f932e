//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the mobile dispatcher, the health probes, the form
//! accepted by every action and the response bodies each action produces.
//! The document is served by Swagger UI in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::courses::{CourseAbout, CourseSummary};
use crate::inbound::http::courseware::{
    ChapterBody, CoursewareContentsBody, SectionBody, SectionUnitsBody, UnitBody, VerticalBody,
};
use crate::inbound::http::enrollments::{EnrollmentChangeBody, EnrollmentItem, EnrollmentListBody};
use crate::inbound::http::form::MobileApiForm;
use crate::inbound::http::schemas::{StatusBody, SuccessBody};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "sessionid",
                "Session cookie issued by POST /mobile_api/login.",
            ))),
        );
    }
}

/// OpenAPI document for the mobile API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "LMS mobile API",
        description = "Form-driven actions consumed by the mobile learning apps, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::dispatch::mobile_api,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        MobileApiForm,
        SuccessBody,
        StatusBody,
        EnrollmentItem,
        EnrollmentListBody,
        EnrollmentChangeBody,
        CourseSummary,
        CourseAbout,
        CoursewareContentsBody,
        SectionUnitsBody,
        ChapterBody,
        SectionBody,
        UnitBody,
        VerticalBody,
    )),
    tags(
        (name = "mobile", description = "Actions dispatched by name under /mobile_api"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
