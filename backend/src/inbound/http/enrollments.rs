//! Enrollment actions: listing a learner's courses and enrolling.

use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ports::CourseEnrollment;
use crate::domain::{EnrollmentChangeRequest, OrgFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::form::ActionContext;
use crate::inbound::http::schemas::StatusBody;

/// One enrolled course as shown on the mobile dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EnrollmentItem {
    pub course_image_url: String,
    #[schema(example = "edX/DemoX/Demo_Course")]
    pub course_id: String,
    pub display_organization: Option<String>,
    pub display_number: String,
    pub display_name: String,
    pub course_start: Option<DateTime<Utc>>,
    pub course_end: Option<DateTime<Utc>>,
    pub enrollment_start: Option<DateTime<Utc>>,
    pub enrollment_end: Option<DateTime<Utc>>,
    pub advertised_start: Option<String>,
    pub enrollment_date: DateTime<Utc>,
    pub active: bool,
}

impl From<&CourseEnrollment> for EnrollmentItem {
    fn from(pair: &CourseEnrollment) -> Self {
        let CourseEnrollment { course, enrollment } = pair;
        Self {
            course_image_url: course.image_url.clone(),
            course_id: course.key.to_string(),
            display_organization: course.about.university.clone(),
            display_number: course.display_number.clone(),
            display_name: course.display_name.clone(),
            course_start: course.schedule.start,
            course_end: course.schedule.end,
            enrollment_start: course.schedule.enrollment_start,
            enrollment_end: course.schedule.enrollment_end,
            advertised_start: course.schedule.advertised_start.clone(),
            enrollment_date: enrollment.created,
            active: enrollment.is_active,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentListBody {
    pub status: bool,
    pub enrollment: Vec<EnrollmentItem>,
}

/// Outcome of an enroll/unenroll request.
#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct EnrollmentChangeBody {
    pub status: bool,
    /// Raw refusal message from the enrollment service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// List the learner's enrollments, honouring microsite organization rules.
pub async fn course_enrollments(ctx: ActionContext) -> ApiResult<HttpResponse> {
    let Some(user) = ctx.user() else {
        return Ok(HttpResponse::Ok().json(StatusBody::UNAVAILABLE));
    };
    let microsites = &ctx.state.microsites;
    let current_org = microsites.course_org_filter(ctx.host.clone()).await?;
    let filter = OrgFilter::for_microsite(current_org, microsites.all_orgs().await?);

    let pairs = ctx
        .state
        .enrollments
        .course_enrollments(user, &filter)
        .await?;
    Ok(HttpResponse::Ok().json(EnrollmentListBody {
        status: true,
        enrollment: pairs.iter().map(EnrollmentItem::from).collect(),
    }))
}

/// Forward an enroll/unenroll request and report refusals softly.
pub async fn course_enroll(ctx: ActionContext) -> ApiResult<HttpResponse> {
    let request = EnrollmentChangeRequest {
        user: ctx.user(),
        course_id: ctx.form.course_id.clone(),
        enrollment_action: ctx.form.enrollment_action.clone(),
    };
    let response = ctx
        .state
        .enrollment_changes
        .change_enrollment(&request)
        .await?;

    let body = match response.rejection_reason() {
        Some(reason) => EnrollmentChangeBody {
            status: false,
            reason: Some(reason.to_owned()),
        },
        None => EnrollmentChangeBody {
            status: true,
            reason: None,
        },
    };
    Ok(HttpResponse::Ok().json(body))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::test as actix_test;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::domain::ports::{MockEnrollmentCommand, MockEnrollmentQuery, MockMicrositeRegistry};
    use crate::domain::{
        Course, CourseKey, Enrollment, EnrollmentChangeResponse, FailurePolicy, UserId,
    };
    use crate::inbound::http::state::{HttpState, HttpStatePorts};
    use crate::inbound::http::test_utils::{fixture_state, post_action, signed_in, test_app};
    use crate::settings::CookieSettings;

    fn state_with(ports: HttpStatePorts) -> HttpState {
        HttpState::new(ports, FailurePolicy::Degrade, CookieSettings::default())
    }

    fn pair(course_id: &str, day: u32) -> CourseEnrollment {
        let key: CourseKey = course_id.parse().expect("valid key");
        CourseEnrollment {
            course: Course::builder(key).build(),
            enrollment: Enrollment {
                created: Utc
                    .with_ymd_and_hms(2014, 1, day, 0, 0, 0)
                    .single()
                    .expect("valid date"),
                is_active: day % 2 == 0,
            },
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn anonymous_listing_is_soft_failure() {
        let app = actix_test::init_service(test_app(fixture_state())).await;

        let res = actix_test::call_service(&app, post_action("get_course_enrollment", &[]).to_request())
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({"status": false}));
    }

    #[rstest]
    #[actix_web::test]
    async fn demo_enrollment_is_projected() {
        let app = actix_test::init_service(test_app(fixture_state())).await;
        let session = signed_in(&app, 1).await;

        let res = actix_test::call_service(
            &app,
            post_action("get_course_enrollment", &[]).cookie(session).to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["status"], true);
        let item = &body["enrollment"][0];
        assert_eq!(item["course_id"], "edX/DemoX/Demo_Course");
        assert_eq!(item["display_organization"], "edX");
        assert_eq!(item["course_start"], "2013-02-05T05:00:00Z");
        assert_eq!(item["course_end"], Value::Null);
        assert_eq!(item["enrollment_date"], "2014-03-01T12:00:00Z");
        assert_eq!(item["active"], true);
    }

    #[rstest]
    #[actix_web::test]
    async fn every_pair_yields_an_item() {
        let mut enrollments = MockEnrollmentQuery::new();
        enrollments.expect_course_enrollments().returning(|_, _| {
            Ok(vec![
                pair("edX/DemoX/Demo_Course", 1),
                pair("MITx/6.002x/2013_Spring", 2),
                pair("HarvardX/CS50x/2014", 3),
            ])
        });
        let ports = HttpStatePorts {
            enrollments: Arc::new(enrollments),
            ..HttpStatePorts::fixtures()
        };
        let app = actix_test::init_service(test_app(state_with(ports))).await;
        let session = signed_in(&app, 5).await;

        let res = actix_test::call_service(
            &app,
            post_action("get_course_enrollment", &[]).cookie(session).to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(res).await;
        let ids: Vec<&str> = body["enrollment"]
            .as_array()
            .expect("enrollment array")
            .iter()
            .filter_map(|item| item["course_id"].as_str())
            .collect();
        assert_eq!(
            ids,
            ["edX/DemoX/Demo_Course", "MITx/6.002x/2013_Spring", "HarvardX/CS50x/2014"]
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn microsite_host_scopes_the_org_filter() {
        let mut microsites = MockMicrositeRegistry::new();
        microsites
            .expect_course_org_filter()
            .withf(|host| host.as_deref() == Some("mitx.example.com"))
            .returning(|_| Ok(Some("MITx".to_owned())));
        microsites
            .expect_all_orgs()
            .returning(|| Ok(BTreeSet::from(["MITx".to_owned(), "HarvardX".to_owned()])));
        let mut enrollments = MockEnrollmentQuery::new();
        enrollments
            .expect_course_enrollments()
            .withf(|user, filter| {
                *user == UserId::new(5).expect("fixture id")
                    && *filter
                        == OrgFilter {
                            include: Some("MITx".to_owned()),
                            exclude: BTreeSet::from(["HarvardX".to_owned()]),
                        }
            })
            .times(1)
            .returning(|_, _| Ok(vec![pair("MITx/6.002x/2013_Spring", 4)]));
        let ports = HttpStatePorts {
            microsites: Arc::new(microsites),
            enrollments: Arc::new(enrollments),
            ..HttpStatePorts::fixtures()
        };
        let app = actix_test::init_service(test_app(state_with(ports))).await;
        let session = signed_in(&app, 5).await;

        let res = actix_test::call_service(
            &app,
            post_action("get_course_enrollment", &[])
                .insert_header((header::HOST, "mitx.example.com"))
                .cookie(session)
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["enrollment"].as_array().map(Vec::len), Some(1));
    }

    #[rstest]
    #[case(400, "Course id is invalid", json!({"status": false, "reason": "Course id is invalid"}))]
    #[case(403, "", json!({"status": false, "reason": ""}))]
    #[case(200, "", json!({"status": true}))]
    #[case(302, "/login", json!({"status": true}))]
    #[actix_web::test]
    async fn enrollment_change_maps_refusals(
        #[case] status: u16,
        #[case] reply: &'static str,
        #[case] expected: Value,
    ) {
        let mut command = MockEnrollmentCommand::new();
        command
            .expect_change_enrollment()
            .withf(|request| {
                request.course_id.as_deref() == Some("edX/DemoX/Demo_Course")
                    && request.enrollment_action.as_deref() == Some("enroll")
                    && request.user.is_none()
            })
            .returning(move |_| {
                Ok(EnrollmentChangeResponse {
                    status,
                    body: reply.to_owned(),
                })
            });
        let ports = HttpStatePorts {
            enrollment_changes: Arc::new(command),
            ..HttpStatePorts::fixtures()
        };
        let app = actix_test::init_service(test_app(state_with(ports))).await;

        let res = actix_test::call_service(
            &app,
            post_action(
                "course_enroll",
                &[
                    ("course_id", "edX/DemoX/Demo_Course"),
                    ("enrollment_action", "enroll"),
                ],
            )
            .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn fixture_rejects_missing_course_id() {
        let app = actix_test::init_service(test_app(fixture_state())).await;
        let session = signed_in(&app, 1).await;

        let res = actix_test::call_service(
            &app,
            post_action("course_enroll", &[("enrollment_action", "enroll")])
                .cookie(session)
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({"status": false, "reason": "Course id not specified"})
        );
    }
}
