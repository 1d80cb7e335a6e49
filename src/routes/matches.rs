use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::core::MatchSelector;
use crate::models::{Envelope, ErrorResponse, ScoredCandidate, UserProfile};
use crate::services::{
    CacheKey, ChatClient, QuoteBoard, ResponseCache, SessionStore, UserDataClient, UserDataError,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub userdata: Arc<UserDataClient>,
    pub chat: Arc<ChatClient>,
    pub sessions: Arc<SessionStore>,
    pub quotes: Arc<QuoteBoard>,
    pub cache: Arc<ResponseCache>,
    pub selector: MatchSelector,
    pub default_limit: usize,
}

/// Configure match-making routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/recommendations/{user_id}",
        web::get().to(get_recommendations),
    );
}

/// Match recommendations endpoint
///
/// GET /match/recommendations/{user_id}
///
/// Fetches the requester's profile and candidate pool from the
/// user-data service, runs the match selector, and returns the matches
/// with internal scores stripped.
async fn get_recommendations(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();

    if user_id.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "invalid_user_id".to_string(),
            message: "user id must not be empty".to_string(),
            status_code: 400,
        });
    }

    let cache_key = CacheKey::matches(&user_id);
    if let Some(cached) = state.cache.get(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    tracing::info!("Finding matches for user: {}", user_id);

    let bundle = match state.userdata.fetch_user_bundle(&user_id).await {
        Ok(bundle) => bundle,
        Err(UserDataError::NotFound(id)) => {
            tracing::info!("User {} not found upstream", id);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "user_not_found".to_string(),
                message: format!("no user data for {}", id),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch user bundle for {}: {}", user_id, e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "upstream_unavailable".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    tracing::debug!(
        "Found {} pool profiles for {} (preference: {:?})",
        bundle.pool.len(),
        user_id,
        bundle.requester.interested_in
    );

    let matches = match state
        .selector
        .select_matches(&bundle.requester, bundle.pool, state.default_limit)
    {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("Match selection failed for {}: {}", user_id, e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_argument".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    tracing::info!("Returning {} matches for user {}", matches.len(), user_id);

    let count = matches.len();
    let payload = serde_json::to_value(Envelope::ok(
        "Match recommendations retrieved successfully",
        json!({
            "matches": clean_matches_for_response(&bundle.requester, &matches),
            "count": count,
        }),
    ))
    .unwrap_or_default();

    state.cache.insert(cache_key, payload.clone()).await;

    HttpResponse::Ok().json(payload)
}

/// Strip internal-only fields and attach the match description before
/// the payload leaves the service
fn clean_matches_for_response(
    requester: &UserProfile,
    matches: &[ScoredCandidate],
) -> Vec<Value> {
    let requester_name = display_name(requester, "User");

    matches
        .iter()
        .filter_map(|m| {
            let mut value = serde_json::to_value(m).ok()?;
            if let Some(obj) = value.as_object_mut() {
                obj.remove("matchScore");
                obj.insert(
                    "matchDescription".to_string(),
                    Value::String(format!(
                        "Match between {} and {}",
                        requester_name,
                        display_name(&m.profile, "Match")
                    )),
                );
            }
            Some(value)
        })
        .collect()
}

fn display_name(profile: &UserProfile, fallback: &str) -> String {
    profile
        .extra
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}
