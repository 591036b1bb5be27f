use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::content::application::domain::entities::{
    PortfolioContent, Profile, ProjectCard, Skill, Testimonial, TimelineEntry,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Full portfolio content
#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    responses((status = 200, description = "All static page content", body = inline(SuccessResponse<PortfolioContent>)))
)]
#[get("/api/content")]
pub async fn get_content_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.content())
}

/// Profile (hero, about and footer text)
#[utoipa::path(
    get,
    path = "/api/content/profile",
    tag = "content",
    responses((status = 200, description = "Profile", body = inline(SuccessResponse<Profile>)))
)]
#[get("/api/content/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.profile())
}

/// Skills with proficiency percentages
#[utoipa::path(
    get,
    path = "/api/content/skills",
    tag = "content",
    responses((status = 200, description = "Skills", body = inline(SuccessResponse<Vec<Skill>>)))
)]
#[get("/api/content/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.skills())
}

/// Tools & libraries
#[utoipa::path(
    get,
    path = "/api/content/tools",
    tag = "content",
    responses((status = 200, description = "Tools", body = inline(SuccessResponse<Vec<String>>)))
)]
#[get("/api/content/tools")]
pub async fn get_tools_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.tools())
}

/// Project gallery
#[utoipa::path(
    get,
    path = "/api/content/projects",
    tag = "content",
    responses((status = 200, description = "Project cards", body = inline(SuccessResponse<Vec<ProjectCard>>)))
)]
#[get("/api/content/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.projects())
}

/// Experience timeline
#[utoipa::path(
    get,
    path = "/api/content/timeline",
    tag = "content",
    responses((status = 200, description = "Timeline entries", body = inline(SuccessResponse<Vec<TimelineEntry>>)))
)]
#[get("/api/content/timeline")]
pub async fn get_timeline_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.timeline())
}

/// Testimonials
#[utoipa::path(
    get,
    path = "/api/content/testimonials",
    tag = "content",
    responses((status = 200, description = "Testimonials (may be empty)", body = inline(SuccessResponse<Vec<Testimonial>>)))
)]
#[get("/api/content/testimonials")]
pub async fn get_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.testimonials())
}
