mod clients;
mod domain;
mod handlers;
mod routes;
mod service;

use actix_web::{web, App, HttpServer};
use common::config::AppConfig;

use clients::FetchClient;
use service::ProcessingService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::from_env();

    let log_level: tracing::Level = config
        .log_level
        .parse()
        .expect("LOG_LEVEL must be one of trace, debug, info, warn, error");
    tracing_subscriber::fmt().with_max_level(log_level).init();

    // Single shared outbound client so connections pool across requests
    let fetch_client = FetchClient::new(config.fetch_timeout_secs)
        .expect("Failed to create HTTP client");
    let processing_service = ProcessingService::new(fetch_client);

    let server_address = config.server_address();
    tracing::info!("🌐 MPC Server starting on http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(processing_service.clone()))
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
}
