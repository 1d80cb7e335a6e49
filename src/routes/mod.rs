// Route exports
pub mod chat;
pub mod matches;
pub mod quotes;

use crate::models::HealthResponse;
use actix_web::{web, HttpResponse, Responder};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .service(web::scope("/match").configure(matches::configure))
        .service(web::scope("/date-mate").configure(chat::configure))
        .service(web::scope("/notification").configure(quotes::configure));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
