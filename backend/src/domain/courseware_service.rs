//! Courseware navigation for mobile clients.
//!
//! Resolves either the whole table of contents or a single section into
//! units and verticals. Access decisions made by the catalogue always reach
//! the caller; other failures inside the walk are subject to the injected
//! [`FailurePolicy`].

use std::sync::Arc;

use tracing::error;

use super::ports::{CourseCatalogue, CoursewareRepository, EnrollmentQuery, ModuleRenderer};
use super::{
    AccessAction, ContentNode, Course, CourseKey, Error, PrefetchDepth, TocSection, Unit, UserId,
};

/// What to do with an unexpected failure while walking the courseware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Surface the error to the caller (debug deployments).
    Propagate,
    /// Log the error and answer `{"status": false}` (production).
    Degrade,
}

impl FailurePolicy {
    /// Policy matching the deployment's debug flag.
    #[must_use]
    pub fn for_debug(debug: bool) -> Self {
        if debug {
            Self::Propagate
        } else {
            Self::Degrade
        }
    }
}

/// Parameters of a courseware request from an authenticated learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub user: UserId,
    pub course: CourseKey,
    pub chapter: Option<String>,
    pub section: Option<String>,
    /// Saved position inside the section, as submitted.
    pub position: Option<String>,
}

/// Section of the table of contents with its resolved units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionUnits {
    pub section: TocSection,
    pub units: Option<Vec<Unit>>,
}

/// Chapter of the table of contents with resolved sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterUnits {
    pub display_name: String,
    pub url_name: String,
    pub active: bool,
    pub sections: Vec<SectionUnits>,
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoursewareView {
    /// Nothing to show; clients render `{"status": false}`.
    Unavailable,
    /// Whole course outline with units for every section.
    Contents {
        course_id: CourseKey,
        course_title: String,
        chapters: Vec<ChapterUnits>,
    },
    /// Units of a single section; `None` when rendering was not possible.
    Section { units: Option<Vec<Unit>> },
}

/// Courseware navigation service.
#[derive(Clone)]
pub struct CoursewareService {
    catalogue: Arc<dyn CourseCatalogue>,
    enrollments: Arc<dyn EnrollmentQuery>,
    content: Arc<dyn CoursewareRepository>,
    renderer: Arc<dyn ModuleRenderer>,
    policy: FailurePolicy,
}

impl CoursewareService {
    pub fn new(
        catalogue: Arc<dyn CourseCatalogue>,
        enrollments: Arc<dyn EnrollmentQuery>,
        content: Arc<dyn CoursewareRepository>,
        renderer: Arc<dyn ModuleRenderer>,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            catalogue,
            enrollments,
            content,
            renderer,
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Resolve the courseware view for `request`.
    ///
    /// # Errors
    /// Returns the catalogue's error when the course is missing or access is
    /// denied, and any walk failure when the policy is
    /// [`FailurePolicy::Propagate`].
    pub async fn navigate(&self, request: &NavigationRequest) -> Result<CoursewareView, Error> {
        let course = self
            .catalogue
            .course_with_access(Some(request.user), AccessAction::Load, &request.course)
            .await?;
        if !self
            .enrollments
            .is_enrolled(request.user, &request.course)
            .await?
        {
            return Ok(CoursewareView::Unavailable);
        }

        match self.walk(request, &course).await {
            Ok(view) => Ok(view),
            Err(err) => self.recover(request, err),
        }
    }

    fn recover(&self, request: &NavigationRequest, err: Error) -> Result<CoursewareView, Error> {
        if err.code().is_access_denial() || self.policy == FailurePolicy::Propagate {
            return Err(err);
        }
        error!(
            user = %request.user,
            course = %request.course,
            chapter = ?request.chapter,
            section = ?request.section,
            position = ?request.position,
            error = %err,
            "courseware navigation failed"
        );
        Ok(CoursewareView::Unavailable)
    }

    async fn walk(
        &self,
        request: &NavigationRequest,
        course: &Course,
    ) -> Result<CoursewareView, Error> {
        let outline = self
            .content
            .course_outline(&request.course, PrefetchDepth::Limited(2))
            .await?;
        if !outline.has_children_at_depth(2) {
            return Ok(CoursewareView::Unavailable);
        }

        let position = match request.position.as_deref() {
            Some(raw) => match parse_position(raw) {
                Some(position) => Some(position),
                None => return Ok(CoursewareView::Unavailable),
            },
            None => None,
        };

        match (request.chapter.as_deref(), request.section.as_deref()) {
            (Some(chapter), Some(section)) => {
                let units = self
                    .units(request, &outline, chapter, section, position)
                    .await?;
                Ok(CoursewareView::Section { units })
            }
            _ => self.contents(request, course, &outline).await,
        }
    }

    async fn contents(
        &self,
        request: &NavigationRequest,
        course: &Course,
        outline: &ContentNode,
    ) -> Result<CoursewareView, Error> {
        let toc = self
            .content
            .table_of_contents(
                request.user,
                &request.course,
                request.chapter.clone(),
                request.section.clone(),
            )
            .await?;

        let mut chapters = Vec::with_capacity(toc.len());
        for chapter in toc {
            let mut sections = Vec::with_capacity(chapter.sections.len());
            for section in chapter.sections {
                let units = self
                    .units(request, outline, &chapter.url_name, &section.url_name, None)
                    .await?;
                sections.push(SectionUnits { section, units });
            }
            chapters.push(ChapterUnits {
                display_name: chapter.display_name,
                url_name: chapter.url_name,
                active: chapter.active,
                sections,
            });
        }

        Ok(CoursewareView::Contents {
            course_id: course.key.clone(),
            course_title: course.display_name.clone(),
            chapters,
        })
    }

    async fn units(
        &self,
        request: &NavigationRequest,
        outline: &ContentNode,
        chapter: &str,
        section: &str,
        position: Option<i64>,
    ) -> Result<Option<Vec<Unit>>, Error> {
        let chapter_node = outline.child(chapter).ok_or_else(|| {
            Error::internal(format!(
                "chapter {chapter} not found in course {}",
                request.course
            ))
        })?;
        let section_node = chapter_node.child(section).ok_or_else(|| {
            Error::internal(format!(
                "section {section} not found in chapter {chapter} of course {}",
                request.course
            ))
        })?;

        let section_tree = self
            .content
            .item(
                &request.course,
                &section_node.location_name,
                PrefetchDepth::Unlimited,
            )
            .await?;
        let rendered = self
            .renderer
            .render_section(request.user, &request.course, &section_tree, position)
            .await?;

        Ok(rendered.map(|items| items.iter().map(Unit::from).collect()))
    }
}

/// Parse a submitted section position.
///
/// Accepts an optional sign followed by ASCII digits, ignoring surrounding
/// whitespace. Integers beyond the `i64` range saturate at its bounds.
fn parse_position(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    match trimmed.parse::<i64>() {
        Ok(position) => Some(position),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

#[cfg(test)]
#[path = "courseware_service_tests.rs"]
mod tests;
