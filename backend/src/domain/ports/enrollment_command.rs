//! Port for the platform's enroll/unenroll operation.
//!
//! The operation answers like an HTTP view: a status code and a raw body.
//! The mobile adapter only distinguishes refusals (400/403) from the rest.

use async_trait::async_trait;

use super::demo_course::demo_course_key;
use crate::domain::{CourseKey, EnrollmentChangeRequest, EnrollmentChangeResponse, Error};

/// Enrollment change port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentCommand: Send + Sync {
    /// Apply the requested enrollment action.
    async fn change_enrollment(
        &self,
        request: &EnrollmentChangeRequest,
    ) -> Result<EnrollmentChangeResponse, Error>;
}

/// Enrollment service validating requests against the demo catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEnrollmentCommand;

fn reply(status: u16, body: &str) -> EnrollmentChangeResponse {
    EnrollmentChangeResponse {
        status,
        body: body.to_owned(),
    }
}

#[async_trait]
impl EnrollmentCommand for FixtureEnrollmentCommand {
    async fn change_enrollment(
        &self,
        request: &EnrollmentChangeRequest,
    ) -> Result<EnrollmentChangeResponse, Error> {
        if request.user.is_none() {
            return Ok(reply(403, ""));
        }
        let Some(course_id) = request.course_id.as_deref() else {
            return Ok(reply(400, "Course id not specified"));
        };
        let known = course_id
            .parse::<CourseKey>()
            .ok()
            .is_some_and(|key| demo_course_key() == Some(key));
        if !known {
            return Ok(reply(400, "Course id is invalid"));
        }
        match request.enrollment_action.as_deref() {
            Some("enroll" | "unenroll") => Ok(reply(200, "")),
            _ => Ok(reply(400, "Enrollment action is invalid")),
        }
    }
}
