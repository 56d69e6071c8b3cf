mod app_state;
mod extractors;
mod handlers;
mod http_errors;
mod status;

use crate::{
    api::Api, config::Config, database::Database, security::Security, server::app_state::AppState,
    surprises::SurpriseStore,
};
use actix_web::{App, HttpServer, middleware, web};
use anyhow::Context;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
pub async fn run(config: Config, http_port: u16) -> Result<(), anyhow::Error> {
    let database = Database::connect(&config.db).await?;

    if config.security.jwt_secret.is_none() {
        warn!("JWT secret isn't configured, all requests will be treated as anonymous.");
    }

    let security = web::Data::new(Security::new(&config.security));
    let state = web::Data::new(AppState::new(Api::new(config, database)?));

    let http_server_url = format!("0.0.0.0:{http_port}");
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure(state.clone(), security.clone()))
    })
    .bind(&http_server_url)
    .with_context(|| format!("Failed to bind to {}.", &http_server_url))?;

    info!("Surprises API server is available at http://{http_server_url}");

    http_server
        .run()
        .await
        .with_context(|| "Failed to run Surprises API server.")
}

/// Registers application state and all API routes.
pub fn configure<S: SurpriseStore>(
    state: web::Data<AppState<S>>,
    security: web::Data<Security>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(state)
            .app_data(security)
            .app_data(web::JsonConfig::default().error_handler(http_errors::json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(http_errors::query_payload_error))
            .service(
                web::scope("/api")
                    .route("/status", web::get().to(handlers::status_get::<S>))
                    .service(
                        web::scope("/surprises")
                            .route("", web::post().to(handlers::surprises_create::<S>))
                            .route("/{token}", web::get().to(handlers::surprises_reveal::<S>))
                            .route(
                                "/{token}/unlock",
                                web::post().to(handlers::surprises_unlock::<S>),
                            )
                            .route("/{id}", web::put().to(handlers::surprises_update::<S>))
                            .route("/{id}", web::delete().to(handlers::surprises_delete::<S>)),
                    )
                    .service(
                        web::scope("/user/surprises")
                            .route("", web::get().to(handlers::user_surprises_list::<S>))
                            .route("/{id}", web::get().to(handlers::user_surprises_get::<S>)),
                    ),
            );
    }
}
