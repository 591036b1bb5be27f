use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::contact::application::domain::entities::SubmissionStatus;

/// What the render layer shows under the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SubmissionStatusView {
    #[schema(example = true)]
    pub sent: bool,
    #[schema(example = json!(null))]
    pub error_message: Option<String>,
}

impl From<&SubmissionStatus> for SubmissionStatusView {
    fn from(status: &SubmissionStatus) -> Self {
        match status {
            SubmissionStatus::Idle => Self::default(),
            SubmissionStatus::Sent => Self {
                sent: true,
                error_message: None,
            },
            SubmissionStatus::Failed(reason) => Self {
                sent: false,
                error_message: Some(reason.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_shows_nothing() {
        let view = SubmissionStatusView::from(&SubmissionStatus::Idle);
        assert!(!view.sent);
        assert!(view.error_message.is_none());
    }

    #[test]
    fn sent_shows_confirmation_only() {
        let view = SubmissionStatusView::from(&SubmissionStatus::Sent);
        assert!(view.sent);
        assert!(view.error_message.is_none());
    }

    #[test]
    fn failed_shows_reason() {
        let view = SubmissionStatusView::from(&SubmissionStatus::Failed("try later".to_string()));
        assert!(!view.sent);
        assert_eq!(view.error_message.as_deref(), Some("try later"));
    }
}
