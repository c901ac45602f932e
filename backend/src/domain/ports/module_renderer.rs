//! Port for the content rendering service.
//!
//! Rendering binds a section to the learner's state (progress, position)
//! and yields the display items a client walks. `Ok(None)` means the
//! rendering context could not be built for this learner.

use async_trait::async_trait;

use super::demo_course::demo_units;
use crate::domain::{ContentNode, CourseKey, DisplayItem, Error, UserId};

/// Rendering service port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModuleRenderer: Send + Sync {
    /// Render `section` for `user`, optionally seeded at `position`.
    async fn render_section(
        &self,
        user: UserId,
        key: &CourseKey,
        section: &ContentNode,
        position: Option<i64>,
    ) -> Result<Option<Vec<DisplayItem>>, Error>;
}

/// Renderer producing the demo units for the demo section.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureModuleRenderer;

#[async_trait]
impl ModuleRenderer for FixtureModuleRenderer {
    async fn render_section(
        &self,
        _user: UserId,
        _key: &CourseKey,
        section: &ContentNode,
        _position: Option<i64>,
    ) -> Result<Option<Vec<DisplayItem>>, Error> {
        Ok((section.location_name == "welcome").then(demo_units))
    }
}
