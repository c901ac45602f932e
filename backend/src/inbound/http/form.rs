//! Request parameters shared by every mobile action.
//!
//! Clients submit form-encoded bodies; GET requests carry the same fields in
//! the query string. Body fields win over query fields.

use actix_web::web;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{CourseKey, CourseKeyError, Error, UserId};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Fields a mobile client may send with any action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct MobileApiForm {
    /// Course identifier in `org/number/run` form.
    #[schema(example = "edX/DemoX/Demo_Course")]
    pub course_id: Option<String>,
    pub chapter: Option<String>,
    pub section: Option<String>,
    /// Saved position inside a section; must be an integer when present.
    pub position: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// `"true"` asks for a persistent login.
    pub remember: Option<String>,
    /// `enroll` or `unenroll`.
    pub enrollment_action: Option<String>,
}

impl MobileApiForm {
    /// Fill fields missing from `self` with those of `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            course_id: self.course_id.or(fallback.course_id),
            chapter: self.chapter.or(fallback.chapter),
            section: self.section.or(fallback.section),
            position: self.position.or(fallback.position),
            email: self.email.or(fallback.email),
            password: self.password.or(fallback.password),
            remember: self.remember.or(fallback.remember),
            enrollment_action: self.enrollment_action.or(fallback.enrollment_action),
        }
    }

    pub(crate) fn remember_me(&self) -> bool {
        self.remember
            .as_deref()
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
    }
}

/// Everything an action handler receives from the dispatcher.
pub struct ActionContext {
    pub state: web::Data<HttpState>,
    pub session: SessionContext,
    /// Value of the `Host` header, used to pick the microsite.
    pub host: Option<String>,
    pub form: MobileApiForm,
}

impl ActionContext {
    pub(crate) fn user(&self) -> Option<UserId> {
        self.session.user_id()
    }

    /// The submitted `course_id`; absent or malformed ids are reported as
    /// a missing course.
    pub(crate) fn course_key(&self) -> Result<CourseKey, Error> {
        let raw = self
            .form
            .course_id
            .as_deref()
            .ok_or_else(|| Error::not_found("course_id is required"))?;
        raw.parse().map_err(|error: CourseKeyError| {
            Error::not_found(error.to_string()).with_details(json!({ "courseId": raw }))
        })
    }
}
