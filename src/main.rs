use actix_web::{web, App, HttpServer};
use parkit::config::EnvConfig;
use parkit::db::postgres_service::PostgresService;
use parkit::graphql::{broker::ChangeBroker, build_schema};
use parkit::routes::configure_routes;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .unwrap_or_else(|e| panic!("Failed to initialize PostgresService: {e}")),
    );

    let broker = ChangeBroker::new();
    let schema = build_schema(
        Arc::clone(&postgres_service),
        broker.clone(),
        config.jwt.clone(),
    );

    tracing::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(schema.clone()))
            .app_data(web::Data::new(config.jwt.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
