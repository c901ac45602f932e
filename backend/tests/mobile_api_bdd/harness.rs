//! Server harness and shared world for the mobile API behaviour tests.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. `WorldFixture` stops the server even
//! if a step panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;

use actix_session::SessionMiddleware;
use actix_session::config::CookieContentSecurity;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use mobile_api::domain::FailurePolicy;
use mobile_api::inbound::http::dispatch::mobile_api as mobile_api_route;
use mobile_api::inbound::http::state::{HttpState, HttpStatePorts};
use mobile_api::settings::CookieSettings;
use mobile_api::{CsrfCookie, Trace};
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

pub(crate) const SESSION_COOKIE: &str = "sessionid";

pub(crate) struct MobileWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) session_cookie: Option<Cookie<'static>>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_cookies: Vec<Cookie<'static>>,
    pub(crate) last_trace_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<MobileWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        let ctx = self.world.borrow();
        let server = ctx.server.clone();
        ctx.local.block_on(&ctx.runtime, async move {
            server.stop(true).await;
        });
    }
}

pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(false)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .build()
}

async fn spawn_mobile_server(state: HttpState) -> Result<(String, ServerHandle), String> {
    let key = Key::generate();
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let cookies = state.cookies.clone();
    let data = web::Data::new(state);

    let server = HttpServer::new(move || {
        let api = web::scope("/mobile_api")
            .wrap(CsrfCookie::new(&cookies))
            .wrap(session_middleware(key.clone()))
            .service(mobile_api_route);

        App::new()
            .app_data(data.clone())
            .wrap(Trace)
            .service(api)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();
    let state = HttpState::new(
        HttpStatePorts::fixtures(),
        FailurePolicy::Degrade,
        CookieSettings::default(),
    );

    let (base_url, server) = local
        .block_on(&runtime, async { spawn_mobile_server(state).await })
        .expect("server should start");

    WorldFixture {
        world: Rc::new(RefCell::new(MobileWorld {
            runtime,
            local,
            base_url,
            server,
            session_cookie: None,
            last_status: None,
            last_body: None,
            last_cookies: Vec::new(),
            last_trace_id: None,
        })),
    }
}
