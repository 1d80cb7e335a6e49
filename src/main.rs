mod config;
mod core;
mod models;
mod prompts;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use config::Settings;
use core::MatchSelector;
use routes::matches::AppState;
use services::{
    spawn_daily_quote_task, ChatClient, QuoteBoard, ResponseCache, SessionStore, UserDataClient,
};
use std::sync::Arc;
use tracing::{error, info};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Date Mate backend...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the user-data client
    let userdata = Arc::new(UserDataClient::new(settings.userdata.base_url.clone()));

    info!("User-data client initialized");

    // Initialize the chat client shared by the advisor and the quotes
    let chat = Arc::new(ChatClient::new(
        settings.openai.endpoint.clone(),
        settings.openai.api_key.clone(),
        settings.openai.model.clone(),
    ));

    // Session store for advisor conversations
    let sessions = Arc::new(SessionStore::new(
        settings.sessions.capacity,
        settings.sessions.ttl_secs,
    ));

    info!(
        "Session store initialized ({} sessions, TTL: {}s)",
        settings.sessions.capacity, settings.sessions.ttl_secs
    );

    // Quote board plus the daily schedule
    let quotes = Arc::new(QuoteBoard::new(chat.clone()));
    spawn_daily_quote_task(quotes.clone(), settings.quotes.hour, settings.quotes.minute);

    info!(
        "Daily quote scheduled at {:02}:{:02} UTC",
        settings.quotes.hour, settings.quotes.minute
    );

    // Response cache (optional)
    let cache = if settings.cache.enabled {
        info!(
            "Response cache enabled ({} entries, TTL: {}s)",
            settings.cache.capacity, settings.cache.ttl_secs
        );
        Arc::new(ResponseCache::new(settings.cache.capacity, settings.cache.ttl_secs))
    } else {
        info!("Response cache disabled");
        Arc::new(ResponseCache::disabled())
    };

    // Match selector with the configured processing cap
    let selector = MatchSelector::new(settings.matching.processing_cap);

    info!(
        "Match selector initialized (processing cap: {}, default limit: {})",
        settings.matching.processing_cap, settings.matching.default_limit
    );

    // Build application state
    let app_state = AppState {
        userdata,
        chat,
        sessions,
        quotes,
        cache,
        selector,
        default_limit: settings.matching.default_limit,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
