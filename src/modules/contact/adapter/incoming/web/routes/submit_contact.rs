use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::entities::ContactFormState;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Contact form submission from the page
#[derive(Deserialize, ToSchema)]
pub struct ContactRequestDto {
    /// Visitor name
    #[serde(default, alias = "user_name")]
    #[schema(example = "Ada")]
    pub name: String,

    /// Visitor email address
    #[serde(default, alias = "user_email")]
    #[schema(example = "ada@example.com")]
    pub email: String,

    /// Message body
    #[serde(default)]
    #[schema(example = "Hello")]
    pub message: String,
}

impl From<ContactRequestDto> for ContactFormState {
    fn from(dto: ContactRequestDto) -> Self {
        ContactFormState::new(dto.name, dto.email, dto.message)
    }
}

#[derive(Serialize, ToSchema)]
pub struct ContactReceiptResponse {
    /// Submission identifier for support/diagnostics
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    submission_id: String,

    /// Time the submission settled (RFC 3339)
    #[schema(example = "2025-01-01T12:00:00Z")]
    submitted_at: String,

    #[schema(example = true)]
    sent: bool,

    #[schema(example = json!(null))]
    error_message: Option<String>,
}

/// Submit the contact form
///
/// Validates the form and forwards it to the configured email-delivery
/// service exactly once.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequestDto,
    responses(
        (
            status = 200,
            description = "Message sent",
            body = inline(SuccessResponse<ContactReceiptResponse>),
            example = json!({
                "success": true,
                "data": {
                    "submission_id": "123e4567-e89b-12d3-a456-426614174000",
                    "submitted_at": "2025-01-01T12:00:00Z",
                    "sent": true,
                    "error_message": null
                }
            })
        ),
        (
            status = 400,
            description = "Missing field or malformed email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid email format"
                }
            })
        ),
        (
            status = 502,
            description = "Email service failed; the visitor may retry",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "DELIVERY_FAILED",
                    "message": "Failed to send. Please try again later."
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form: ContactFormState = req.into_inner().into();

    match data.submit_contact.execute(form).await {
        Ok(receipt) => {
            info!(submission_id = %receipt.submission_id, "Contact form submitted");

            ApiResponse::success(ContactReceiptResponse {
                submission_id: receipt.submission_id.to_string(),
                submitted_at: receipt.submitted_at.to_rfc3339(),
                sent: receipt.status.sent,
                error_message: receipt.status.error_message,
            })
        }

        Err(SubmitContactError::Validation(e)) => {
            warn!(field = %e.field(), "Contact form rejected: {}", e);
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(SubmitContactError::DeliveryFailed(message)) => {
            ApiResponse::bad_gateway("DELIVERY_FAILED", &message)
        }

        Err(SubmitContactError::Internal(ref e)) => {
            error!(error = %e, "Contact submission failed unexpectedly");
            ApiResponse::internal_error()
        }
    }
}
