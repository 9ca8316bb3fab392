//! REST API endpoints for the security assistant

use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::model::ChatMessage;
use crate::service::AssistantService;
use crate::service::assistant::prompts::QUICK_PROMPTS;

/// A conversation submitted by the client: prior turns plus the latest user
/// message. Any system messages are ignored server-side.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Answer the latest user message
#[utoipa::path(
    post,
    path = "/v1/assistant/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = crate::model::ChatReply),
        (status = 400, description = "Conversation contains no user message")
    ),
    tag = "assistant"
)]
#[post("/v1/assistant/chat")]
pub async fn chat(
    service: web::Data<AssistantService>,
    body: web::Json<ChatRequest>,
) -> Result<HttpResponse, ApiError> {
    let reply = service.chat(&body.messages).await?;
    Ok(HttpResponse::Ok().json(reply))
}

/// List the suggested one-tap prompts
#[utoipa::path(
    get,
    path = "/v1/assistant/prompts",
    responses(
        (status = 200, description = "Suggested prompts")
    ),
    tag = "assistant"
)]
#[get("/v1/assistant/prompts")]
pub async fn quick_prompts() -> impl Responder {
    HttpResponse::Ok().json(QUICK_PROMPTS)
}

/// Configure assistant routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(chat).service(quick_prompts);
}
