//! Builders for the shared HTTP state.

use actix_web::web;
use tracing::info;

use mobile_api::inbound::http::state::{HttpState, HttpStatePorts};
use mobile_api::settings::MobileApiSettings;

/// Build the handler state from deployment settings.
///
/// Every port is served by its in-memory fixture until platform adapters
/// are wired in.
pub(super) fn build_http_state(settings: &MobileApiSettings) -> web::Data<HttpState> {
    build_http_state_with(HttpStatePorts::fixtures(), settings)
}

fn build_http_state_with(
    ports: HttpStatePorts,
    settings: &MobileApiSettings,
) -> web::Data<HttpState> {
    let policy = settings.failure_policy();
    let cookies = settings.cookie_settings();
    info!(
        ?policy,
        marketing_cookie = %cookies.marketing_cookie_name,
        csrf_cookie = %cookies.csrf_cookie_name,
        cookie_domain = ?cookies.cookie_domain,
        "mobile API state configured"
    );
    web::Data::new(HttpState::new(ports, policy, cookies))
}
