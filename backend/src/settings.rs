//! Process configuration loaded via OrthoConfig.
//!
//! Values layer from defaults, configuration files, `MOBILE_API_*`
//! environment variables and command-line flags. They are read once at
//! startup and passed to handlers through the HTTP state.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::FailurePolicy;

const DEFAULT_MARKETING_COOKIE_NAME: &str = "edxloggedin";
const DEFAULT_CSRF_COOKIE_NAME: &str = "csrftoken";
const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 8080);

/// Deployment settings for the mobile API.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MOBILE_API")]
pub struct MobileApiSettings {
    /// Debug deployments surface courseware failures instead of degrading.
    #[ortho_config(default = false)]
    pub debug: bool,
    /// Cookie telling the marketing site a learner is logged in.
    pub marketing_cookie_name: Option<String>,
    /// Domain shared by the session and marketing cookies.
    pub session_cookie_domain: Option<String>,
    /// Name of the CSRF defence cookie.
    pub csrf_cookie_name: Option<String>,
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
}

impl MobileApiSettings {
    /// Marketing cookie name, falling back to the platform default.
    #[must_use]
    pub fn marketing_cookie_name(&self) -> &str {
        self.marketing_cookie_name
            .as_deref()
            .unwrap_or(DEFAULT_MARKETING_COOKIE_NAME)
    }

    /// CSRF cookie name, falling back to the platform default.
    #[must_use]
    pub fn csrf_cookie_name(&self) -> &str {
        self.csrf_cookie_name
            .as_deref()
            .unwrap_or(DEFAULT_CSRF_COOKIE_NAME)
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Courseware failure handling for this deployment.
    #[must_use]
    pub fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::for_debug(self.debug)
    }

    /// Cookie names and domain handed to the HTTP handlers.
    #[must_use]
    pub fn cookie_settings(&self) -> CookieSettings {
        CookieSettings {
            marketing_cookie_name: self.marketing_cookie_name().to_owned(),
            csrf_cookie_name: self.csrf_cookie_name().to_owned(),
            cookie_domain: self.session_cookie_domain.clone(),
        }
    }
}

/// Cookie configuration used by the login, logout and CSRF adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
    pub marketing_cookie_name: String,
    pub csrf_cookie_name: String,
    pub cookie_domain: Option<String>,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            marketing_cookie_name: DEFAULT_MARKETING_COOKIE_NAME.to_owned(),
            csrf_cookie_name: DEFAULT_CSRF_COOKIE_NAME.to_owned(),
            cookie_domain: None,
        }
    }
}
