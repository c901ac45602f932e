//! Domain primitives, ports and services of the mobile API.
//!
//! Purpose: describe the platform entities the mobile adapters read
//! (users, courses, enrollments, courseware) and the ports through which
//! they are fetched, without any HTTP concerns.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - CourseKey, Course, Enrollment, ContentNode and friends: read models.
//! - CoursewareService: the one use-case with real branching logic.
//! - ports: collaborator traits with fixture implementations.

pub mod auth;
pub mod course;
pub mod courseware;
pub mod courseware_service;
pub mod enrollment;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginAttempt, LoginOutcome};
pub use self::course::{
    AboutSections, AccessAction, Course, CourseBuilder, CourseKey, CourseKeyError,
    CourseSchedule, sort_by_announcement,
};
pub use self::courseware::{
    ContentNode, DisplayItem, DisplayKind, PrefetchDepth, TocChapter, TocSection, Unit, Vertical,
    VideoComponent,
};
pub use self::courseware_service::{
    ChapterUnits, CoursewareService, CoursewareView, FailurePolicy, NavigationRequest,
    SectionUnits,
};
pub use self::enrollment::{
    Enrollment, EnrollmentChangeRequest, EnrollmentChangeResponse, OrgFilter,
};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{PlatformUser, UserId, UserValidationError};
