use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::ErrorResponse;
use crate::routes::matches::AppState;

/// Configure notification routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate", web::get().to(generate_now))
        .route("/history", web::get().to(history));
}

/// Generate a new date-idea quote immediately
///
/// GET /notification/generate
async fn generate_now(state: web::Data<AppState>) -> impl Responder {
    match state.quotes.store_daily_quote().await {
        Ok(quote) => HttpResponse::Ok().json(quote),
        Err(e) => {
            tracing::error!("Failed to generate quote: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "quote_generation_failed".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
    }
}

/// Stored quote history, oldest first
///
/// GET /notification/history
async fn history(state: web::Data<AppState>) -> impl Responder {
    let quotes = state.quotes.history().await;
    let count = quotes.len();
    HttpResponse::Ok().json(json!({
        "quotes": quotes,
        "count": count,
    }))
}
