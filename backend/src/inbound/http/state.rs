//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` so they depend only on domain
//! ports and the deployment's cookie settings.

use std::sync::Arc;

use crate::domain::ports::{
    CourseCatalogue, CoursewareRepository, EnrollmentCommand, EnrollmentQuery,
    FixtureCourseCatalogue, FixtureCoursewareRepository, FixtureEnrollmentCommand,
    FixtureEnrollmentQuery, FixtureLoginService, FixtureMicrositeRegistry, FixtureModuleRenderer,
    FixtureSessionRegistry, FixtureUserDirectory, FixtureUserPreferencesQuery, LoginService,
    MicrositeRegistry, ModuleRenderer, SessionRegistry, UserDirectory, UserPreferencesQuery,
};
use crate::domain::{CoursewareService, FailurePolicy};
use crate::settings::CookieSettings;

/// Parameter object bundling every platform port the handlers use.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub users: Arc<dyn UserDirectory>,
    pub preferences: Arc<dyn UserPreferencesQuery>,
    pub sessions: Arc<dyn SessionRegistry>,
    pub catalogue: Arc<dyn CourseCatalogue>,
    pub microsites: Arc<dyn MicrositeRegistry>,
    pub enrollments: Arc<dyn EnrollmentQuery>,
    pub enrollment_changes: Arc<dyn EnrollmentCommand>,
    pub courseware: Arc<dyn CoursewareRepository>,
    pub renderer: Arc<dyn ModuleRenderer>,
}

impl HttpStatePorts {
    /// Ports backed by the in-memory demo course.
    ///
    /// # Examples
    /// ```
    /// use mobile_api::inbound::http::state::HttpStatePorts;
    ///
    /// let ports = HttpStatePorts::fixtures();
    /// let _login = ports.login.clone();
    /// ```
    #[must_use]
    pub fn fixtures() -> Self {
        Self {
            login: Arc::new(FixtureLoginService),
            users: Arc::new(FixtureUserDirectory),
            preferences: Arc::new(FixtureUserPreferencesQuery),
            sessions: Arc::new(FixtureSessionRegistry),
            catalogue: Arc::new(FixtureCourseCatalogue),
            microsites: Arc::new(FixtureMicrositeRegistry),
            enrollments: Arc::new(FixtureEnrollmentQuery),
            enrollment_changes: Arc::new(FixtureEnrollmentCommand),
            courseware: Arc::new(FixtureCoursewareRepository),
            renderer: Arc::new(FixtureModuleRenderer),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub users: Arc<dyn UserDirectory>,
    pub preferences: Arc<dyn UserPreferencesQuery>,
    pub sessions: Arc<dyn SessionRegistry>,
    pub catalogue: Arc<dyn CourseCatalogue>,
    pub microsites: Arc<dyn MicrositeRegistry>,
    pub enrollments: Arc<dyn EnrollmentQuery>,
    pub enrollment_changes: Arc<dyn EnrollmentCommand>,
    pub navigator: CoursewareService,
    pub cookies: CookieSettings,
}

impl HttpState {
    /// Assemble handler state, wiring the courseware navigator from the
    /// catalogue, enrollment and content ports.
    ///
    /// # Examples
    /// ```
    /// use mobile_api::domain::FailurePolicy;
    /// use mobile_api::inbound::http::state::{HttpState, HttpStatePorts};
    /// use mobile_api::settings::CookieSettings;
    ///
    /// let state = HttpState::new(
    ///     HttpStatePorts::fixtures(),
    ///     FailurePolicy::Degrade,
    ///     CookieSettings::default(),
    /// );
    /// assert_eq!(state.cookies.marketing_cookie_name, "edxloggedin");
    /// ```
    pub fn new(ports: HttpStatePorts, policy: FailurePolicy, cookies: CookieSettings) -> Self {
        let HttpStatePorts {
            login,
            users,
            preferences,
            sessions,
            catalogue,
            microsites,
            enrollments,
            enrollment_changes,
            courseware,
            renderer,
        } = ports;
        let navigator = CoursewareService::new(
            catalogue.clone(),
            enrollments.clone(),
            courseware,
            renderer,
            policy,
        );
        Self {
            login,
            users,
            preferences,
            sessions,
            catalogue,
            microsites,
            enrollments,
            enrollment_changes,
            navigator,
            cookies,
        }
    }
}
