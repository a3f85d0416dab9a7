use std::time::Duration;

use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;

use staff_portal::auth::{
    client::HttpAuthApi,
    session::Session,
    storage::{FileStorage, SessionStorage},
};
use staff_portal::config::Config;
use staff_portal::docs::ApiDoc;
use staff_portal::routes;
use staff_portal::state::AppState;
use staff_portal::store::RecordStore;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "portal.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let persistent = FileStorage::open(&config.storage_path)
        .with_context(|| format!("opening client storage at {}", config.storage_path))?;
    let session = Data::new(Session::new(
        HttpAuthApi::new(config.auth_api_url.clone()),
        Box::new(persistent),
        Box::new(SessionStorage::new(Duration::from_secs(
            config.session_token_ttl,
        ))),
    ));
    let state = Data::new(AppState::new(RecordStore::seeded()));

    info!(auth_api = %config.auth_api_url, "Auth service configured");

    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(state.clone())
            .app_data(session.clone())
            .configure(|cfg| routes::configure::<HttpAuthApi>(cfg, &config_data))
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}
