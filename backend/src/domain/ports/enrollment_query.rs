//! Port for reading enrollments.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use super::demo_course::{DEMO_USER_ID, demo_course, demo_course_key};
use crate::domain::{Course, CourseKey, Enrollment, Error, OrgFilter, UserId};

/// A course paired with the learner's enrollment in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseEnrollment {
    pub course: Course,
    pub enrollment: Enrollment,
}

/// Enrollment store port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentQuery: Send + Sync {
    /// Courses the user is enrolled in, restricted by organization.
    async fn course_enrollments(
        &self,
        user: UserId,
        filter: &OrgFilter,
    ) -> Result<Vec<CourseEnrollment>, Error>;

    /// Whether the user holds an active enrollment in the course.
    async fn is_enrolled(&self, user: UserId, key: &CourseKey) -> Result<bool, Error>;

    /// Whether the course has reached its enrollment cap.
    async fn is_course_full(&self, key: &CourseKey) -> Result<bool, Error>;
}

/// Store where the demo user is enrolled in the demo course.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEnrollmentQuery;

fn is_demo(user: UserId, key: &CourseKey) -> bool {
    user.get() == DEMO_USER_ID && demo_course_key().as_ref() == Some(key)
}

#[async_trait]
impl EnrollmentQuery for FixtureEnrollmentQuery {
    async fn course_enrollments(
        &self,
        user: UserId,
        filter: &OrgFilter,
    ) -> Result<Vec<CourseEnrollment>, Error> {
        let Some(key) = demo_course_key().filter(|key| is_demo(user, key)) else {
            return Ok(Vec::new());
        };
        let allowed = !filter.exclude.contains(key.org())
            && filter.include.as_deref().is_none_or(|org| org == key.org());
        if !allowed {
            return Ok(Vec::new());
        }
        let created = Utc
            .with_ymd_and_hms(2014, 3, 1, 12, 0, 0)
            .single()
            .ok_or_else(|| Error::internal("invalid fixture enrollment date"))?;
        Ok(vec![CourseEnrollment {
            course: demo_course(key),
            enrollment: Enrollment {
                created,
                is_active: true,
            },
        }])
    }

    async fn is_enrolled(&self, user: UserId, key: &CourseKey) -> Result<bool, Error> {
        Ok(is_demo(user, key))
    }

    async fn is_course_full(&self, _key: &CourseKey) -> Result<bool, Error> {
        Ok(false)
    }
}
