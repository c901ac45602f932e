//! Domain ports for the platform services the mobile API adapts.
//!
//! Every collaborator is a trait here with a deterministic `Fixture*`
//! implementation, used by the binary until real adapters are wired, and a
//! `mockall` mock for unit tests.

mod course_catalogue;
mod courseware_repository;
pub(crate) mod demo_course;
mod enrollment_command;
mod enrollment_query;
mod login_service;
mod microsite_registry;
mod module_renderer;
mod session_registry;
mod user_directory;
mod user_preferences_query;

#[cfg(test)]
pub use course_catalogue::MockCourseCatalogue;
pub use course_catalogue::{CourseCatalogue, FixtureCourseCatalogue};
#[cfg(test)]
pub use courseware_repository::MockCoursewareRepository;
pub use courseware_repository::{CoursewareRepository, FixtureCoursewareRepository};
#[cfg(test)]
pub use enrollment_command::MockEnrollmentCommand;
pub use enrollment_command::{EnrollmentCommand, FixtureEnrollmentCommand};
#[cfg(test)]
pub use enrollment_query::MockEnrollmentQuery;
pub use enrollment_query::{CourseEnrollment, EnrollmentQuery, FixtureEnrollmentQuery};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FixtureLoginService, LoginService};
#[cfg(test)]
pub use microsite_registry::MockMicrositeRegistry;
pub use microsite_registry::{FixtureMicrositeRegistry, MicrositeRegistry};
#[cfg(test)]
pub use module_renderer::MockModuleRenderer;
pub use module_renderer::{FixtureModuleRenderer, ModuleRenderer};
#[cfg(test)]
pub use session_registry::MockSessionRegistry;
pub use session_registry::{FixtureSessionRegistry, SessionRegistry};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{FixtureUserDirectory, UserDirectory};
#[cfg(test)]
pub use user_preferences_query::MockUserPreferencesQuery;
pub use user_preferences_query::{FixtureUserPreferencesQuery, UserPreferencesQuery};
