use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    content: &'static str,
    email_backend: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Content registry holds a profile
/// - Reports which delivery backend is wired, without contacting it
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let content_status = if data.content.profile().name.trim().is_empty() {
        "unhealthy"
    } else {
        "ok"
    };

    let body = ReadinessResponse {
        status: content_status,
        content: content_status,
        email_backend: data.submit_contact.backend(),
    };

    if content_status == "ok" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
