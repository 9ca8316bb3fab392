//! REST API endpoints for scam classification

use actix_web::{HttpResponse, Responder, get, post, web};
use utoipa::OpenApi;

use crate::api::error::ApiError;
use crate::model::{ScanRecord, ScanRequest, scan_presets};
use crate::service::ScanService;

#[derive(OpenApi)]
#[openapi(
    paths(
        scan,
        presets,
        crate::api::assistant::chat,
        crate::api::assistant::quick_prompts,
        crate::api::health::liveness,
        crate::api::health::readiness,
    ),
    components(schemas(
        crate::model::ScanRequest,
        crate::model::ScanRecord,
        crate::model::Verdict,
        crate::model::VerdictStatus,
        crate::model::ScamType,
        crate::model::RiskLevel,
        crate::model::ScanOutcome,
        crate::model::ScanPreset,
        crate::model::ChatMessage,
        crate::model::ChatRole,
        crate::model::ChatReply,
        crate::api::assistant::ChatRequest,
        crate::api::health::HealthStatus,
        crate::api::health::ReadinessStatus,
        crate::api::health::DependencyHealth,
    )),
    tags(
        (name = "scan", description = "Scam classification"),
        (name = "assistant", description = "Security assistant chat"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Classify submitted content
///
/// Always answers with a fully populated verdict: on upstream failure the
/// record carries a conservative fallback verdict and the outcome tag says
/// which path was taken. The only 400 is empty content.
#[utoipa::path(
    post,
    path = "/v1/scan",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Classification completed", body = ScanRecord),
        (status = 400, description = "Empty scan content")
    ),
    tag = "scan"
)]
#[post("/v1/scan")]
pub async fn scan(
    service: web::Data<ScanService>,
    body: web::Json<ScanRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    let report = service.classify(&request).await?;
    Ok(HttpResponse::Ok().json(ScanRecord::new(request, report)))
}

/// List the scan-type presets the client UI offers
#[utoipa::path(
    get,
    path = "/v1/scan/presets",
    responses(
        (status = 200, description = "Available scan presets")
    ),
    tag = "scan"
)]
#[get("/v1/scan/presets")]
pub async fn presets() -> impl Responder {
    HttpResponse::Ok().json(scan_presets())
}

/// Configure scan routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(scan).service(presets);
}
