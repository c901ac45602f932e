//! Session lifecycle actions: `init`, `login` and `logout`.

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use tracing::{info, warn};

use crate::domain::{Error, LoginAttempt};
use crate::inbound::http::ApiResult;
use crate::inbound::http::form::ActionContext;
use crate::inbound::http::schemas::SuccessBody;

/// Handshake used by clients to obtain the CSRF cookie.
pub async fn init(_ctx: ActionContext) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(SuccessBody { success: true }))
}

/// Relay the credential check and, on success, open a session and decorate
/// the payload with the learner's identity and language.
pub async fn login(ctx: ActionContext) -> ApiResult<HttpResponse> {
    let ActionContext {
        state,
        session,
        form,
        ..
    } = ctx;
    let attempt = LoginAttempt::new(
        form.email.clone().unwrap_or_default(),
        form.password.clone().unwrap_or_default(),
        form.remember_me(),
    );

    let mut outcome = state.login.authenticate(&attempt).await?;
    if outcome.succeeded() {
        let user_id = outcome
            .authenticated_user()
            .ok_or_else(|| Error::internal("login service reported success without a user"))?;
        session.persist_user(user_id)?;
        let user = state.users.find_user(user_id).await?;
        let language = state.preferences.language_preference(user_id).await?;
        info!(user = %user_id, "mobile login succeeded");
        outcome = outcome.augmented(&user, language);
    }

    let (status, payload) = outcome.into_parts();
    let status = StatusCode::from_u16(status)
        .map_err(|_| Error::internal(format!("login service returned status {status}")))?;
    Ok(HttpResponse::build(status).json(payload))
}

/// End the session here and in the platform, and drop the marketing cookie.
pub async fn logout(ctx: ActionContext) -> ApiResult<HttpResponse> {
    let user = ctx.user();
    if let Err(error) = ctx.state.sessions.end_session(user).await {
        warn!(%error, user = ?user, "session termination failed; logging out locally");
    }
    ctx.session.purge();

    let cookies = &ctx.state.cookies;
    let mut marketing = Cookie::new(cookies.marketing_cookie_name.clone(), "");
    marketing.set_path("/");
    if let Some(domain) = cookies.cookie_domain.clone() {
        marketing.set_domain(domain);
    }
    marketing.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(marketing)
        .json(SuccessBody { success: true }))
}
