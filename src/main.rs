use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

mod api;
mod config;
mod db;
mod error;

use crate::api::{
    company::{handlers::company_config, CompanyService},
    health::health_config,
    job::{handlers::job_config, JobService},
    validation,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = config::Config::from_env().expect("Failed to load configuration");

    std::fs::create_dir_all(&settings.log_dir).expect("Failed to create logs directory");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let log_file = tracing_appender::rolling::daily(&settings.log_dir, "jobly.log");
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    info!("Starting jobly");

    let pool = db::connection::get_connection(&settings.database_url, settings.max_db_connections)
        .await
        .expect("Failed to connect to database");

    info!("Database connection pool established");

    db::migrations::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let port = settings.port;
    let max_payload_size = settings.max_payload_size;
    let settings_data = web::Data::new(settings);
    let server_pool = pool.clone();

    let server = HttpServer::new(move || {
        let job_service = web::Data::new(JobService::new(server_pool.clone()));
        let company_service = web::Data::new(CompanyService::new(server_pool.clone()));

        let payload_config = web::PayloadConfig::default().limit(max_payload_size);

        App::new()
            .app_data(web::Data::new(server_pool.clone()))
            .app_data(settings_data.clone())
            .app_data(job_service)
            .app_data(company_service)
            .app_data(payload_config)
            .app_data(validation::json_config())
            .configure(health_config)
            .configure(job_config)
            .configure(company_config)
    });

    info!("Server starting on http://127.0.0.1:{}", port);

    server.bind(("127.0.0.1", port))?.run().await
}
