//! Port for the course content store and table-of-contents builder.

use async_trait::async_trait;

use super::demo_course::{demo_course_key, demo_outline, demo_section_tree, demo_toc};
use crate::domain::{ContentNode, CourseKey, Error, PrefetchDepth, TocChapter, UserId};

/// Content store port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoursewareRepository: Send + Sync {
    /// The course's root node with children prefetched to `depth`.
    async fn course_outline(
        &self,
        key: &CourseKey,
        depth: PrefetchDepth,
    ) -> Result<ContentNode, Error>;

    /// Re-fetch a node of the course by location name.
    async fn item(
        &self,
        key: &CourseKey,
        location_name: &str,
        depth: PrefetchDepth,
    ) -> Result<ContentNode, Error>;

    /// Chapters and sections as the learner may navigate them, with the
    /// requested chapter and section marked active.
    async fn table_of_contents(
        &self,
        user: UserId,
        key: &CourseKey,
        active_chapter: Option<String>,
        active_section: Option<String>,
    ) -> Result<Vec<TocChapter>, Error>;
}

/// Content store serving the demo course.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCoursewareRepository;

fn ensure_demo(key: &CourseKey) -> Result<(), Error> {
    if demo_course_key().as_ref() == Some(key) {
        Ok(())
    } else {
        Err(Error::not_found(format!("no content for course {key}")))
    }
}

#[async_trait]
impl CoursewareRepository for FixtureCoursewareRepository {
    async fn course_outline(
        &self,
        key: &CourseKey,
        _depth: PrefetchDepth,
    ) -> Result<ContentNode, Error> {
        ensure_demo(key)?;
        Ok(demo_outline())
    }

    async fn item(
        &self,
        key: &CourseKey,
        location_name: &str,
        _depth: PrefetchDepth,
    ) -> Result<ContentNode, Error> {
        ensure_demo(key)?;
        let section = demo_section_tree();
        if section.location_name == location_name {
            Ok(section)
        } else {
            Err(Error::internal(format!(
                "item {location_name} missing from course {key}"
            )))
        }
    }

    async fn table_of_contents(
        &self,
        _user: UserId,
        key: &CourseKey,
        active_chapter: Option<String>,
        active_section: Option<String>,
    ) -> Result<Vec<TocChapter>, Error> {
        ensure_demo(key)?;
        let mut toc = demo_toc();
        for chapter in &mut toc {
            chapter.active = active_chapter.as_deref() == Some(chapter.url_name.as_str());
            for section in &mut chapter.sections {
                section.active =
                    chapter.active && active_section.as_deref() == Some(section.url_name.as_str());
            }
        }
        Ok(toc)
    }
}
