//! CSRF cookie middleware for the mobile scope.
//!
//! Every response carries the CSRF token cookie so mobile clients can echo
//! it back on form posts. A well-formed token sent by the client is kept;
//! anything else is replaced with a freshly minted one.

use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::warn;
use uuid::Uuid;

use crate::settings::CookieSettings;

const TOKEN_LEN: usize = 32;

fn is_well_formed(token: &str) -> bool {
    token.len() == TOKEN_LEN && token.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn mint_token() -> String {
    Uuid::new_v4().simple().to_string()
}

#[derive(Debug)]
struct CsrfCookieConfig {
    name: String,
    domain: Option<String>,
}

/// Ensures the CSRF cookie is present on every response.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use mobile_api::CsrfCookie;
/// use mobile_api::settings::CookieSettings;
///
/// let app = App::new().wrap(CsrfCookie::new(&CookieSettings::default()));
/// ```
#[derive(Clone, Debug)]
pub struct CsrfCookie {
    config: Rc<CsrfCookieConfig>,
}

impl CsrfCookie {
    #[must_use]
    pub fn new(cookies: &CookieSettings) -> Self {
        Self {
            config: Rc::new(CsrfCookieConfig {
                name: cookies.csrf_cookie_name.clone(),
                domain: cookies.cookie_domain.clone(),
            }),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CsrfCookie
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CsrfCookieMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CsrfCookieMiddleware {
            service,
            config: Rc::clone(&self.config),
        }))
    }
}

/// Service wrapper produced by [`CsrfCookie`].
pub struct CsrfCookieMiddleware<S> {
    service: S,
    config: Rc<CsrfCookieConfig>,
}

impl<S, B> Service<ServiceRequest> for CsrfCookieMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = req
            .cookie(&self.config.name)
            .map(|cookie| cookie.value().to_owned())
            .filter(|value| is_well_formed(value))
            .unwrap_or_else(mint_token);
        let config = Rc::clone(&self.config);
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            let mut cookie = Cookie::new(config.name.clone(), token);
            cookie.set_path("/");
            if let Some(domain) = &config.domain {
                cookie.set_domain(domain.clone());
            }
            if let Err(error) = res.response_mut().add_cookie(&cookie) {
                warn!(%error, cookie = %config.name, "failed to set CSRF cookie");
            }
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    fn settings(domain: Option<&str>) -> CookieSettings {
        CookieSettings {
            cookie_domain: domain.map(str::to_owned),
            ..CookieSettings::default()
        }
    }

    async fn issued_cookie(
        cookies: CookieSettings,
        incoming: Option<&str>,
    ) -> Cookie<'static> {
        let app = test::init_service(
            App::new()
                .wrap(CsrfCookie::new(&cookies))
                .route("/", web::post().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let mut req = test::TestRequest::post().uri("/");
        if let Some(value) = incoming {
            req = req.cookie(Cookie::new(cookies.csrf_cookie_name.clone(), value.to_owned()));
        }
        let res = test::call_service(&app, req.to_request()).await;
        res.response()
            .cookies()
            .find(|c| c.name() == cookies.csrf_cookie_name)
            .map(Cookie::into_owned)
            .expect("csrf cookie issued")
    }

    #[rstest]
    #[actix_web::test]
    async fn mints_token_when_absent() {
        let cookie = issued_cookie(settings(None), None).await;
        assert!(is_well_formed(cookie.value()));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.domain(), None);
    }

    #[rstest]
    #[actix_web::test]
    async fn reuses_well_formed_token() {
        let token = "AbCdEfGhIjKlMnOpQrStUvWxYz012345";
        let cookie = issued_cookie(settings(Some("example.com")), Some(token)).await;
        assert_eq!(cookie.value(), token);
        assert_eq!(cookie.domain(), Some("example.com"));
    }

    #[rstest]
    #[case::too_short("abc")]
    #[case::punctuation("AbCdEfGhIjKlMnOpQrStUvWxYz01234!")]
    #[actix_web::test]
    async fn replaces_malformed_token(#[case] incoming: &str) {
        let cookie = issued_cookie(settings(None), Some(incoming)).await;
        assert_ne!(cookie.value(), incoming);
        assert!(is_well_formed(cookie.value()));
    }

    #[rstest]
    #[actix_web::test]
    async fn honours_configured_cookie_name() {
        let cookies = CookieSettings {
            csrf_cookie_name: "xsrf".to_owned(),
            ..CookieSettings::default()
        };
        let cookie = issued_cookie(cookies, None).await;
        assert_eq!(cookie.name(), "xsrf");
    }
}
