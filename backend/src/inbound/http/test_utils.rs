//! Test helpers for inbound HTTP components.

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, test, web};

use crate::domain::{FailurePolicy, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dispatch::mobile_api;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::settings::CookieSettings;

const SIGN_IN_PATH: &str = "/test/session";

/// Session middleware with a throwaway key and a non-`Secure` cookie named
/// `session`.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Handler state backed by the demo fixtures.
pub fn fixture_state() -> HttpState {
    HttpState::new(
        HttpStatePorts::fixtures(),
        FailurePolicy::Degrade,
        CookieSettings::default(),
    )
}

async fn sign_in(session: SessionContext, user_id: web::Path<u64>) -> ApiResult<HttpResponse> {
    let user = UserId::new(user_id.into_inner())
        .map_err(|error| crate::domain::Error::invalid_request(error.to_string()))?;
    session.persist_user(user)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Mobile API app with a helper route that signs a user in.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .service(web::scope("/mobile_api").service(mobile_api))
        .route(
            &format!("{SIGN_IN_PATH}/{{user_id}}"),
            web::post().to(sign_in),
        )
}

/// Session cookie for `user_id`, minted through the test sign-in route.
pub async fn signed_in<S, B>(app: &S, user_id: u64) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri(&format!("{SIGN_IN_PATH}/{user_id}"))
            .to_request(),
    )
    .await;
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("sign-in sets the session cookie")
}

/// Form-encoded POST to a mobile action.
pub fn post_action(action: &str, fields: &[(&str, &str)]) -> test::TestRequest {
    test::TestRequest::post()
        .uri(&format!("/mobile_api/{action}"))
        .set_form(fields)
}
