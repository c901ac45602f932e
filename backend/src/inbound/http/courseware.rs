//! Courseware navigation action.
//!
//! Projects the navigator's [`CoursewareView`] into the JSON the mobile
//! client renders: either the whole table of contents with units attached to
//! every section, or the units of one section.

use std::collections::BTreeMap;

use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    ChapterUnits, CoursewareView, NavigationRequest, SectionUnits, Unit, Vertical,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::form::ActionContext;
use crate::inbound::http::schemas::StatusBody;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VerticalBody {
    Video {
        name: String,
        video_sources: Vec<String>,
        /// Transcript file per language code.
        subtitles: BTreeMap<String, String>,
    },
    Other {
        name: String,
    },
}

impl From<Vertical> for VerticalBody {
    fn from(vertical: Vertical) -> Self {
        match vertical {
            Vertical::Video {
                name,
                video_sources,
                subtitles,
            } => Self::Video {
                name,
                video_sources,
                subtitles,
            },
            Vertical::Other { name } => Self::Other { name },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UnitBody {
    pub name: String,
    pub verticals: Vec<VerticalBody>,
}

impl From<Unit> for UnitBody {
    fn from(unit: Unit) -> Self {
        Self {
            name: unit.name,
            verticals: unit.verticals.into_iter().map(VerticalBody::from).collect(),
        }
    }
}

fn unit_bodies(units: Option<Vec<Unit>>) -> Option<Vec<UnitBody>> {
    units.map(|units| units.into_iter().map(UnitBody::from).collect())
}

/// Table-of-contents section with its units (`null` when unrenderable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SectionBody {
    pub display_name: String,
    pub url_name: String,
    pub format: String,
    pub due: Option<String>,
    pub active: bool,
    pub graded: bool,
    pub units: Option<Vec<UnitBody>>,
}

impl From<SectionUnits> for SectionBody {
    fn from(SectionUnits { section, units }: SectionUnits) -> Self {
        Self {
            display_name: section.display_name,
            url_name: section.url_name,
            format: section.format,
            due: section.due,
            active: section.active,
            graded: section.graded,
            units: unit_bodies(units),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ChapterBody {
    pub display_name: String,
    pub url_name: String,
    pub active: bool,
    pub sections: Vec<SectionBody>,
}

impl From<ChapterUnits> for ChapterBody {
    fn from(chapter: ChapterUnits) -> Self {
        Self {
            display_name: chapter.display_name,
            url_name: chapter.url_name,
            active: chapter.active,
            sections: chapter.sections.into_iter().map(SectionBody::from).collect(),
        }
    }
}

/// Whole-course answer; `sections` holds the chapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CoursewareContentsBody {
    pub course_id: String,
    pub sections: Vec<ChapterBody>,
    pub course_title: String,
    pub status: bool,
}

/// Single-section answer; `status` mirrors whether units were rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SectionUnitsBody {
    pub units: Option<Vec<UnitBody>>,
    pub status: bool,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum CoursewareBody {
    Unavailable(StatusBody),
    Contents(CoursewareContentsBody),
    Section(SectionUnitsBody),
}

impl From<CoursewareView> for CoursewareBody {
    fn from(view: CoursewareView) -> Self {
        match view {
            CoursewareView::Unavailable => Self::Unavailable(StatusBody::UNAVAILABLE),
            CoursewareView::Contents {
                course_id,
                course_title,
                chapters,
            } => Self::Contents(CoursewareContentsBody {
                course_id: course_id.to_string(),
                sections: chapters.into_iter().map(ChapterBody::from).collect(),
                course_title,
                status: true,
            }),
            CoursewareView::Section { units } => {
                let status = units.is_some();
                Self::Section(SectionUnitsBody {
                    units: unit_bodies(units),
                    status,
                })
            }
        }
    }
}

/// Navigate the courseware of an enrolled course.
pub async fn course_courseware(ctx: ActionContext) -> ApiResult<HttpResponse> {
    let Some(user) = ctx.user() else {
        return Ok(HttpResponse::Ok().json(StatusBody::UNAVAILABLE));
    };
    let request = NavigationRequest {
        user,
        course: ctx.course_key()?,
        chapter: ctx.form.chapter.clone(),
        section: ctx.form.section.clone(),
        position: ctx.form.position.clone(),
    };

    let view = ctx.state.navigator.navigate(&request).await?;
    Ok(HttpResponse::Ok().json(CoursewareBody::from(view)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::domain::ports::MockModuleRenderer;
    use crate::domain::{Error, FailurePolicy};
    use crate::inbound::http::state::{HttpState, HttpStatePorts};
    use crate::inbound::http::test_utils::{fixture_state, post_action, signed_in, test_app};
    use crate::settings::CookieSettings;

    const DEMO: &str = "edX/DemoX/Demo_Course";

    fn expected_units() -> Value {
        json!([{
            "name": "Getting started",
            "verticals": [
                {
                    "name": "Welcome video",
                    "type": "video",
                    "video_sources": ["https://cdn.example.com/demox/welcome.mp4"],
                    "subtitles": {"en": "welcome-en", "es": "welcome-es.srt"}
                },
                {"name": "Course overview", "type": "other"}
            ]
        }])
    }

    async fn call(state: HttpState, user: Option<u64>, fields: &[(&str, &str)]) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(state)).await;
        let mut request = post_action("course_courseware", fields);
        if let Some(user) = user {
            request = request.cookie(signed_in(&app, user).await);
        }
        let res = actix_test::call_service(&app, request.to_request()).await;
        let status = res.status();
        (status, actix_test::read_body_json(res).await)
    }

    #[rstest]
    #[actix_web::test]
    async fn anonymous_request_is_soft_failure() {
        let (status, body) = call(fixture_state(), None, &[("course_id", DEMO)]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": false}));
    }

    #[rstest]
    #[actix_web::test]
    async fn table_of_contents_attaches_units_to_sections() {
        let (status, body) = call(fixture_state(), Some(1), &[("course_id", DEMO)]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], true);
        assert_eq!(body["course_id"], DEMO);
        assert_eq!(body["course_title"], "edX Demonstration Course");
        let chapter = &body["sections"][0];
        assert_eq!(chapter["url_name"], "introduction");
        let section = &chapter["sections"][0];
        assert_eq!(section["url_name"], "welcome");
        assert_eq!(section["units"], expected_units());
    }

    #[rstest]
    #[case::no_position(None)]
    #[case::integer_position(Some("3"))]
    #[actix_web::test]
    async fn single_section_returns_units(#[case] position: Option<&str>) {
        let mut fields = vec![
            ("course_id", DEMO),
            ("chapter", "introduction"),
            ("section", "welcome"),
        ];
        fields.extend(position.map(|p| ("position", p)));

        let (_, body) = call(fixture_state(), Some(1), &fields).await;
        assert_eq!(body, json!({"units": expected_units(), "status": true}));
    }

    #[rstest]
    #[actix_web::test]
    async fn non_integer_position_is_soft_failure() {
        let (_, body) = call(
            fixture_state(),
            Some(1),
            &[
                ("course_id", DEMO),
                ("chapter", "introduction"),
                ("section", "welcome"),
                ("position", "abc"),
            ],
        )
        .await;
        assert_eq!(body, json!({"status": false}));
    }

    #[rstest]
    #[actix_web::test]
    async fn unenrolled_learner_is_soft_failure() {
        let (status, body) = call(fixture_state(), Some(9), &[("course_id", DEMO)]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": false}));
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_course_is_not_found() {
        let (status, _) = call(fixture_state(), Some(1), &[("course_id", "edX/Nope/2014")]).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[case(FailurePolicy::Degrade, StatusCode::OK)]
    #[case(FailurePolicy::Propagate, StatusCode::INTERNAL_SERVER_ERROR)]
    #[actix_web::test]
    async fn renderer_faults_follow_failure_policy(
        #[case] policy: FailurePolicy,
        #[case] expected: StatusCode,
    ) {
        let mut renderer = MockModuleRenderer::new();
        renderer
            .expect_render_section()
            .returning(|_, _, _, _| Err(Error::internal("module store timeout")));
        let ports = HttpStatePorts {
            renderer: Arc::new(renderer),
            ..HttpStatePorts::fixtures()
        };
        let state = HttpState::new(ports, policy, CookieSettings::default());

        let (status, body) = call(
            state,
            Some(1),
            &[
                ("course_id", DEMO),
                ("chapter", "introduction"),
                ("section", "welcome"),
            ],
        )
        .await;
        assert_eq!(status, expected);
        if policy == FailurePolicy::Degrade {
            assert_eq!(body, json!({"status": false}));
        }
    }

    #[rstest]
    fn section_without_units_reports_false_status() {
        let body = CoursewareBody::from(CoursewareView::Section { units: None });
        assert_eq!(
            serde_json::to_value(body).expect("serialisable"),
            json!({"units": null, "status": false})
        );
    }
}
