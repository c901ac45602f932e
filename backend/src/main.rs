//! Mobile API entry-point: loads configuration, wires the HTTP server and
//! serves until shutdown.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use mobile_api::inbound::http::health::HealthState;
use mobile_api::inbound::http::session_config::{BuildMode, session_settings_from_env};
use mobile_api::settings::MobileApiSettings;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }

    let settings = MobileApiSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load mobile API settings")?;
    let session = session_settings_from_env(&mockable::DefaultEnv::new(), BuildMode::current())
        .wrap_err("invalid session configuration")?;
    let config = ServerConfig::new(session, settings);
    let bind_addr = config.bind_addr();

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to start server on {bind_addr}"))?;
    info!(%bind_addr, "mobile API listening");

    server.await?;
    health_state.begin_draining();
    Ok(())
}
