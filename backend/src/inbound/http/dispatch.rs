//! Single entry point routing `/mobile_api/{action}` to its handler.
//!
//! ```text
//! POST /mobile_api/login  email=staff@example.com&password=edx
//! GET  /mobile_api/courses
//! POST /mobile_api/course_courseware  course_id=edX/DemoX/Demo_Course
//! ```

use std::fmt;
use std::str::FromStr;

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, route, web};
use futures_util::future::LocalBoxFuture;
use serde_json::json;
use tracing::debug;

use crate::inbound::http::form::{ActionContext, MobileApiForm};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, auth, courses, courseware, enrollments};

/// Actions understood by the mobile API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiAction {
    Init,
    Login,
    Logout,
    CourseEnrollments,
    Courses,
    CourseAbout,
    CourseCourseware,
    CourseEnroll,
}

impl ApiAction {
    pub const ALL: [Self; 8] = [
        Self::Init,
        Self::Login,
        Self::Logout,
        Self::CourseEnrollments,
        Self::Courses,
        Self::CourseAbout,
        Self::CourseCourseware,
        Self::CourseEnroll,
    ];

    /// Path segment naming the action.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Login => "login",
            Self::Logout => "logout",
            Self::CourseEnrollments => "get_course_enrollment",
            Self::Courses => "courses",
            Self::CourseAbout => "course_about",
            Self::CourseCourseware => "course_courseware",
            Self::CourseEnroll => "course_enroll",
        }
    }
}

impl fmt::Display for ApiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mobile action {0:?}")]
pub struct UnknownAction(String);

impl FromStr for ApiAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_owned()))
    }
}

type ActionHandler = fn(ActionContext) -> LocalBoxFuture<'static, ApiResult<HttpResponse>>;

macro_rules! action {
    ($action:ident => $handler:path) => {
        (
            ApiAction::$action,
            |ctx: ActionContext| -> LocalBoxFuture<'static, ApiResult<HttpResponse>> {
                Box::pin($handler(ctx))
            },
        )
    };
}

const ACTIONS: &[(ApiAction, ActionHandler)] = &[
    action!(Init => auth::init),
    action!(Login => auth::login),
    action!(Logout => auth::logout),
    action!(CourseEnrollments => enrollments::course_enrollments),
    action!(Courses => courses::courses),
    action!(CourseAbout => courses::course_about),
    action!(CourseCourseware => courseware::course_courseware),
    action!(CourseEnroll => enrollments::course_enroll),
];

fn handler_for(action: ApiAction) -> Option<ActionHandler> {
    ACTIONS
        .iter()
        .find(|(candidate, _)| *candidate == action)
        .map(|(_, handler)| *handler)
}

/// Dispatch a mobile action.
///
/// Unknown actions answer `{}` with `403 Forbidden`.
#[utoipa::path(
    post,
    path = "/mobile_api/{action}",
    params(("action" = String, Path, description = "Action name, e.g. `courses`")),
    request_body(
        content = MobileApiForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Action result; shape depends on the action"),
        (status = 403, description = "Unknown action or access denied"),
        (status = 404, description = "Course not found", body = crate::domain::Error),
        (status = 500, description = "Internal server error", body = crate::domain::Error)
    ),
    tags = ["mobile"],
    operation_id = "mobileApi",
    security([], ("SessionCookie" = []))
)]
#[route("/{action}", method = "GET", method = "POST")]
pub async fn mobile_api(
    req: HttpRequest,
    action: web::Path<String>,
    state: web::Data<HttpState>,
    session: SessionContext,
    body: Option<web::Form<MobileApiForm>>,
    query: Option<web::Query<MobileApiForm>>,
) -> ApiResult<HttpResponse> {
    let Some(handler) = action.parse::<ApiAction>().ok().and_then(handler_for) else {
        debug!(action = %action, "rejecting unknown mobile action");
        return Ok(HttpResponse::Forbidden().json(json!({})));
    };

    let form = body
        .map(web::Form::into_inner)
        .unwrap_or_default()
        .or(query.map(web::Query::into_inner).unwrap_or_default());
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    handler(ActionContext {
        state,
        session,
        host,
        form,
    })
    .await
}
