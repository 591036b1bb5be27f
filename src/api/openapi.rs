use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};

// Contact
use crate::modules::contact::adapter::incoming::web::routes::{
    ContactReceiptResponse, ContactRequestDto,
};
use crate::modules::contact::application::domain::entities::ContactFormState;
use crate::modules::contact::application::services::SubmissionStatusView;

// Content
use crate::modules::content::application::domain::entities::{
    PortfolioContent, Profile, ProfileStat, ProjectCard, Skill, SocialLink, Testimonial,
    TimelineEntry,
};

// Navigation
use crate::modules::navigation::adapter::incoming::web::routes::NavigationResponse;
use crate::modules::navigation::application::{NavLink, ScrollRequest, ScrollTarget, SectionId};

// Theme
use crate::modules::theme::application::ThemeMode;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Static content, navigation map and contact form for a single-page portfolio"
    ),
    paths(
        // Contact endpoints
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,

        // Content endpoints
        crate::modules::content::adapter::incoming::web::routes::get_content_handler,
        crate::modules::content::adapter::incoming::web::routes::get_profile_handler,
        crate::modules::content::adapter::incoming::web::routes::get_skills_handler,
        crate::modules::content::adapter::incoming::web::routes::get_tools_handler,
        crate::modules::content::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::content::adapter::incoming::web::routes::get_timeline_handler,
        crate::modules::content::adapter::incoming::web::routes::get_testimonials_handler,

        // Navigation endpoints
        crate::modules::navigation::adapter::incoming::web::routes::get_navigation_handler,
        crate::modules::navigation::adapter::incoming::web::routes::scroll_to_section_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Contact DTOs
            ContactRequestDto,
            ContactReceiptResponse,
            ContactFormState,
            SubmissionStatusView,

            // Content
            PortfolioContent,
            Profile,
            ProfileStat,
            SocialLink,
            Skill,
            ProjectCard,
            TimelineEntry,
            Testimonial,

            // Navigation
            NavigationResponse,
            NavLink,
            ScrollRequest,
            ScrollTarget,
            SectionId,

            ThemeMode
        )
    ),
    tags(
        (name = "contact", description = "Contact form submission"),
        (name = "content", description = "Static portfolio content"),
        (name = "navigation", description = "Section anchors and scroll requests"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
