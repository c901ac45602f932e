//! Port for the course catalogue and its access checks.
//!
//! `course_with_access` is the only place access decisions are made: the
//! adapter propagates `NotFound` and `Forbidden` errors unchanged.

use async_trait::async_trait;

use super::demo_course::{demo_course, demo_course_key};
use crate::domain::{AccessAction, Course, CourseKey, Error, UserId};

/// Catalogue port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCatalogue: Send + Sync {
    /// Courses the user (or an anonymous visitor) may browse on `host`.
    async fn visible_courses(
        &self,
        user: Option<UserId>,
        host: Option<String>,
    ) -> Result<Vec<Course>, Error>;

    /// Resolve a course after checking `action` access for `user`.
    async fn course_with_access(
        &self,
        user: Option<UserId>,
        action: AccessAction,
        key: &CourseKey,
    ) -> Result<Course, Error>;
}

/// Catalogue holding only the demo course, open to everyone.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCourseCatalogue;

#[async_trait]
impl CourseCatalogue for FixtureCourseCatalogue {
    async fn visible_courses(
        &self,
        _user: Option<UserId>,
        _host: Option<String>,
    ) -> Result<Vec<Course>, Error> {
        Ok(demo_course_key().map(demo_course).into_iter().collect())
    }

    async fn course_with_access(
        &self,
        _user: Option<UserId>,
        _action: AccessAction,
        key: &CourseKey,
    ) -> Result<Course, Error> {
        match demo_course_key() {
            Some(demo) if &demo == key => Ok(demo_course(demo)),
            _ => Err(Error::not_found(format!("course {key} not found"))),
        }
    }
}
