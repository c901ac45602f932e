//! Catalogue actions: the course list and a single course's about page.

use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{AccessAction, Course, sort_by_announcement};
use crate::inbound::http::ApiResult;
use crate::inbound::http::form::ActionContext;

/// Catalogue entry shown in the "find courses" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CourseSummary {
    pub display_number: String,
    pub course_title: Option<String>,
    pub course_description: Option<String>,
    pub display_organization: Option<String>,
    pub course_image_url: String,
    pub course_start: Option<DateTime<Utc>>,
    #[schema(example = "edX/DemoX/Demo_Course")]
    pub course_id: String,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            display_number: course.display_number.clone(),
            course_title: course.about.title.clone(),
            course_description: course.about.short_description.clone(),
            display_organization: course.about.university.clone(),
            course_image_url: course.image_url.clone(),
            course_start: course.schedule.start,
            course_id: course.key.to_string(),
        }
    }
}

/// Marketing details of one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CourseAbout {
    pub display_number: String,
    pub display_name: Option<String>,
    pub display_organization: Option<String>,
    /// HTML overview section.
    pub about: Option<String>,
    /// Whether the requesting learner is enrolled; `false` when anonymous.
    pub registered: bool,
    pub is_full: bool,
}

/// Courses visible on this host, in announcement order.
///
/// Answers a bare JSON array rather than a `status` envelope.
pub async fn courses(ctx: ActionContext) -> ApiResult<HttpResponse> {
    let mut visible = ctx
        .state
        .catalogue
        .visible_courses(ctx.user(), ctx.host.clone())
        .await?;
    sort_by_announcement(&mut visible);
    let summaries: Vec<CourseSummary> = visible.iter().map(CourseSummary::from).collect();
    Ok(HttpResponse::Ok().json(summaries))
}

/// About page of the requested course.
///
/// Unlike the other actions, a missing course or denied access surfaces as
/// an HTTP error.
pub async fn course_about(ctx: ActionContext) -> ApiResult<HttpResponse> {
    let key = ctx.course_key()?;
    let user = ctx.user();
    let course = ctx
        .state
        .catalogue
        .course_with_access(user, AccessAction::SeeExists, &key)
        .await?;

    let enrollments = &ctx.state.enrollments;
    let registered = match user {
        Some(user) => enrollments.is_enrolled(user, &course.key).await?,
        None => false,
    };
    let is_full = enrollments.is_course_full(&course.key).await?;

    Ok(HttpResponse::Ok().json(CourseAbout {
        display_number: course.display_number.clone(),
        display_name: course.about.title.clone(),
        display_organization: course.about.university.clone(),
        about: course.about.overview.clone(),
        registered,
        is_full,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;

    use crate::domain::ports::{MockCourseCatalogue, MockEnrollmentQuery};
    use crate::domain::{AboutSections, Error, FailurePolicy};
    use crate::inbound::http::state::{HttpState, HttpStatePorts};
    use crate::inbound::http::test_utils::{fixture_state, post_action, signed_in, test_app};
    use crate::settings::CookieSettings;

    fn state_with(ports: HttpStatePorts) -> HttpState {
        HttpState::new(ports, FailurePolicy::Degrade, CookieSettings::default())
    }

    fn ranked(course_id: &str, rank: i64) -> Course {
        Course::builder(course_id.parse().expect("valid key"))
            .announcement_rank(rank)
            .about(AboutSections {
                title: Some(format!("Title of {course_id}")),
                ..AboutSections::default()
            })
            .build()
    }

    #[rstest]
    #[actix_web::test]
    async fn anonymous_listing_is_a_bare_array() {
        let app = actix_test::init_service(test_app(fixture_state())).await;

        let res = actix_test::call_service(&app, post_action("courses", &[]).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        let first = &body.as_array().expect("bare array")[0];
        assert_eq!(first["course_id"], "edX/DemoX/Demo_Course");
        assert_eq!(first["course_title"], "edX Demonstration Course");
        assert_eq!(
            first["course_image_url"],
            "/c4x/edX/DemoX/asset/images_course_image.jpg"
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn listing_keeps_every_course_in_announcement_order() {
        let mut catalogue = MockCourseCatalogue::new();
        catalogue.expect_visible_courses().returning(|_, _| {
            Ok(vec![
                ranked("edX/Late/2014", 3),
                ranked("edX/First/2014", 1),
                ranked("edX/TieA/2014", 2),
                ranked("edX/TieB/2014", 2),
            ])
        });
        let ports = HttpStatePorts {
            catalogue: Arc::new(catalogue),
            ..HttpStatePorts::fixtures()
        };
        let app = actix_test::init_service(test_app(state_with(ports))).await;

        let res = actix_test::call_service(&app, post_action("courses", &[]).to_request()).await;
        let body: Vec<Value> = actix_test::read_body_json(res).await;
        let ids: Vec<&str> = body
            .iter()
            .filter_map(|item| item["course_id"].as_str())
            .collect();
        assert_eq!(
            ids,
            ["edX/First/2014", "edX/TieA/2014", "edX/TieB/2014", "edX/Late/2014"]
        );
    }

    #[rstest]
    #[case::anonymous(None, false)]
    #[case::enrolled(Some(1), true)]
    #[case::other_learner(Some(9), false)]
    #[actix_web::test]
    async fn about_reports_registration(#[case] user: Option<u64>, #[case] registered: bool) {
        let app = actix_test::init_service(test_app(fixture_state())).await;
        let mut request = post_action("course_about", &[("course_id", "edX/DemoX/Demo_Course")]);
        if let Some(user) = user {
            request = request.cookie(signed_in(&app, user).await);
        }

        let res = actix_test::call_service(&app, request.to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["display_number"], "DemoX");
        assert_eq!(body["display_name"], "edX Demonstration Course");
        assert_eq!(body["display_organization"], "edX");
        assert_eq!(body["registered"], registered);
        assert_eq!(body["is_full"], false);
    }

    #[rstest]
    #[case::missing(&[])]
    #[case::malformed(&[("course_id", "not-a-course")])]
    #[case::unknown(&[("course_id", "edX/Nope/2014")])]
    #[actix_web::test]
    async fn about_reports_missing_courses_as_not_found(#[case] fields: &[(&str, &str)]) {
        let app = actix_test::init_service(test_app(fixture_state())).await;

        let res = actix_test::call_service(&app, post_action("course_about", fields).to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], "not_found");
    }

    #[rstest]
    #[actix_web::test]
    async fn about_propagates_access_denial() {
        let mut catalogue = MockCourseCatalogue::new();
        catalogue
            .expect_course_with_access()
            .withf(|_, action, _| *action == AccessAction::SeeExists)
            .returning(|_, _, _| Err(Error::forbidden("course is staff only")));
        let mut enrollments = MockEnrollmentQuery::new();
        enrollments.expect_is_course_full().never();
        let ports = HttpStatePorts {
            catalogue: Arc::new(catalogue),
            enrollments: Arc::new(enrollments),
            ..HttpStatePorts::fixtures()
        };
        let app = actix_test::init_service(test_app(state_with(ports))).await;

        let res = actix_test::call_service(
            &app,
            post_action("course_about", &[("course_id", "edX/Secret/2014")]).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }
}
