use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ChatRequest, ChatResponse, ErrorResponse};
use crate::routes::matches::AppState;
use crate::services::{ChatMessage, ChatParams};

/// Configure dating-advisor routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat", web::post().to(chat));
}

/// Dating advisor chat endpoint
///
/// POST /date-mate/chat
///
/// Request body:
/// ```json
/// {
///   "user_id": "string",
///   "message": "string"
/// }
/// ```
async fn chat(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for chat request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let mut session = state.sessions.get_or_create(&req.user_id).await;
    session.note_topics(&req.message);
    session.messages.push(ChatMessage::user(&req.message));

    let reply = match state.chat.chat(&session.messages, ChatParams::advisor()).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Chat completion failed for {}: {}", req.user_id, e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "chat_unavailable".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    session.messages.push(ChatMessage::assistant(&reply));
    state.sessions.put(&req.user_id, session).await;

    tracing::debug!("Advisor replied to user {}", req.user_id);

    HttpResponse::Ok().json(ChatResponse { response: reply })
}
