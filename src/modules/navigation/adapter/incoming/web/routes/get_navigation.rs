use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::navigation::application::domain::section::{ScrollRequest, SectionId};
use crate::modules::navigation::application::navigator::NavLink;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct NavigationResponse {
    /// Navigation bar entries in display order
    pub links: Vec<NavLink>,
    /// Every registered scroll target
    pub sections: Vec<SectionId>,
    /// Hero call-to-action scroll
    pub call_to_action: Option<ScrollRequest>,
    /// Compact-layout "Top" button scroll
    pub top: ScrollRequest,
}

/// Navigation map
#[utoipa::path(
    get,
    path = "/api/navigation",
    tag = "navigation",
    responses(
        (status = 200, description = "Navigation links and anchors", body = inline(SuccessResponse<NavigationResponse>))
    )
)]
#[get("/api/navigation")]
pub async fn get_navigation_handler(data: web::Data<AppState>) -> impl Responder {
    let navigator = &data.navigator;

    ApiResponse::success(NavigationResponse {
        links: navigator.nav_links(),
        sections: navigator.sections().to_vec(),
        call_to_action: navigator.call_to_action(),
        top: navigator.scroll_to_top(),
    })
}

/// Resolve a section into a scroll request
#[utoipa::path(
    get,
    path = "/api/navigation/{section}",
    tag = "navigation",
    params(("section" = String, Path, description = "Section identifier", example = "projects")),
    responses(
        (status = 200, description = "Scroll request", body = inline(SuccessResponse<ScrollRequest>)),
        (
            status = 404,
            description = "Unknown section",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "SECTION_NOT_FOUND",
                    "message": "Unknown section: blog"
                }
            })
        )
    )
)]
#[get("/api/navigation/{section}")]
pub async fn scroll_to_section_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section = path.into_inner();

    match data.navigator.scroll_to(&section) {
        Some(request) => ApiResponse::success(request),
        None => {
            debug!(section = %section, "No scroll target for section");
            ApiResponse::not_found("SECTION_NOT_FOUND", &format!("Unknown section: {}", section))
        }
    }
}
