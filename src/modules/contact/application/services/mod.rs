pub mod form_controller;
pub mod status_reporter;
pub mod submit_contact_service;

pub use form_controller::{ContactFormController, FormError, SubmitError};
pub use status_reporter::SubmissionStatusView;
pub use submit_contact_service::SubmitContactService;
