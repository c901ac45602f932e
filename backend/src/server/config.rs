//! HTTP server configuration object.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use mobile_api::inbound::http::session_config::SessionSettings;
use mobile_api::settings::MobileApiSettings;

/// Everything the server factory needs, resolved once at startup.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) settings: MobileApiSettings,
}

impl ServerConfig {
    /// Combine validated session settings with the deployment settings.
    #[must_use]
    pub fn new(session: SessionSettings, settings: MobileApiSettings) -> Self {
        let SessionSettings {
            key,
            cookie_secure,
            same_site,
        } = session;
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr: settings.bind_addr(),
            settings,
        }
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
