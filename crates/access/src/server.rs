//! HTTP server wiring for the access service

use crate::registration::{register, RegistrationService, RegistrationState};
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use std::sync::Arc;

#[get("/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "access-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Bind and run the HTTP server with the registration routes mounted.
pub async fn start_server(
    bind_address: &str,
    service: Arc<RegistrationService>,
) -> std::io::Result<()> {
    let state = web::Data::new(RegistrationState { service });

    tracing::info!(%bind_address, "starting access service");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(health_check)
            .service(register)
    })
    .bind(bind_address)?
    .run()
    .await
}
