use access_service::{
    config::{DatabaseConfig, HasherConfig, ServiceConfig},
    registration::RegistrationService,
    server::start_server,
    user::{PasswordHasher, PostgresUserRepository},
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Access Service");

    // Load configuration
    let service_config = ServiceConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let hasher_config = HasherConfig::from_env();

    // Initialize PostgreSQL connection pool
    let pool = PgPoolOptions::new()
        .max_connections(database_config.max_connections)
        .acquire_timeout(database_config.acquire_timeout)
        .connect(&database_config.url)
        .await
        .expect("Failed to create database connection pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let hasher =
        PasswordHasher::new(&hasher_config).expect("Failed to initialize password hasher");

    let repository = Arc::new(PostgresUserRepository::new(pool));
    let service = Arc::new(RegistrationService::new(repository, Arc::new(hasher)));

    start_server(&service_config.bind_address, service).await
}
