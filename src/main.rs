mod web;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use tracing_subscriber::{EnvFilter, fmt};

use profile_site::config::AppConfig;
use web::{SecurityHeaders, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app_config = AppConfig::from_env().expect("PROFILE_* settings are invalid");
    let server = ServerConfig::from_env();

    if !server.index_file().exists() {
        log::warn!(
            "{} not found; build the browser bundle (trunk build --features csr) first",
            server.index_file().display()
        );
    }

    let security = SecurityHeaders::for_api(&app_config.api_base_url);
    let bind_addr = server.bind_addr.clone();
    log::info!("serving {} on {}", server.static_dir.display(), bind_addr);

    HttpServer::new(move || {
        let server = server.clone();
        App::new()
            .wrap(security.clone())
            .wrap(Logger::default())
            .configure(move |cfg| web::routes::configure(cfg, &server))
    })
    .bind(bind_addr)?
    .run()
    .await
}
