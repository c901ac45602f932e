//! Demo course shared by the fixture adapters.
//!
//! The binary serves this course until real platform adapters are wired, so
//! a mobile client can exercise every action end to end.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

use crate::domain::{
    AboutSections, ContentNode, Course, CourseKey, CourseSchedule, DisplayItem, TocChapter,
    TocSection, UserId, VideoComponent,
};

pub(crate) const DEMO_COURSE_ID: &str = "edX/DemoX/Demo_Course";
pub(crate) const DEMO_USER_ID: u64 = 1;
pub(crate) const DEMO_EMAIL: &str = "staff@example.com";
pub(crate) const DEMO_PASSWORD: &str = "edx";

pub(crate) fn demo_user_id() -> Option<UserId> {
    UserId::new(DEMO_USER_ID).ok()
}

pub(crate) fn demo_course_key() -> Option<CourseKey> {
    DEMO_COURSE_ID.parse().ok()
}

pub(crate) fn demo_course(key: CourseKey) -> Course {
    Course::builder(key)
        .display_number("DemoX")
        .display_name("edX Demonstration Course")
        .image_url("/c4x/edX/DemoX/asset/images_course_image.jpg")
        .schedule(CourseSchedule {
            start: Utc.with_ymd_and_hms(2013, 2, 5, 5, 0, 0).single(),
            end: None,
            enrollment_start: Utc.with_ymd_and_hms(2013, 1, 1, 0, 0, 0).single(),
            enrollment_end: None,
            advertised_start: None,
        })
        .about(AboutSections {
            title: Some("edX Demonstration Course".to_owned()),
            short_description: Some("A tour of the learner experience.".to_owned()),
            university: Some("edX".to_owned()),
            overview: Some("<section class=\"about\"><h2>About This Course</h2></section>".to_owned()),
        })
        .build()
}

pub(crate) fn demo_outline() -> ContentNode {
    ContentNode::new("Demo_Course", "edX Demonstration Course").with_children(vec![
        ContentNode::new("introduction", "Introduction")
            .with_children(vec![ContentNode::new("welcome", "Welcome")]),
    ])
}

pub(crate) fn demo_section_tree() -> ContentNode {
    ContentNode::new("welcome", "Welcome").with_children(vec![
        ContentNode::new("welcome_unit", "Getting started").with_children(vec![
            ContentNode::new("welcome_video", "Welcome video"),
            ContentNode::new("welcome_text", "Course overview"),
        ]),
    ])
}

pub(crate) fn demo_toc() -> Vec<TocChapter> {
    vec![TocChapter {
        display_name: "Introduction".to_owned(),
        url_name: "introduction".to_owned(),
        active: false,
        sections: vec![TocSection {
            display_name: "Welcome".to_owned(),
            url_name: "welcome".to_owned(),
            format: String::new(),
            due: None,
            active: false,
            graded: false,
        }],
    }]
}

pub(crate) fn demo_units() -> Vec<DisplayItem> {
    vec![DisplayItem::other("Getting started").with_children(vec![
        DisplayItem::video(
            "Welcome video",
            VideoComponent {
                html5_sources: vec!["https://cdn.example.com/demox/welcome.mp4".to_owned()],
                transcripts: BTreeMap::from([("es".to_owned(), "welcome-es.srt".to_owned())]),
                sub: "welcome-en".to_owned(),
            },
        ),
        DisplayItem::other("Course overview"),
    ])]
}
