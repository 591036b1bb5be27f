//! Per-visit page state and the snapshot the render layer draws from.
//!
//! A [`PageSession`] owns exactly one theme flag, one navigator and one
//! contact-form controller. Nothing here is shared between sessions and
//! nothing outlives the session.

use serde::Serialize;
use std::sync::Arc;

use crate::modules::contact::application::domain::entities::{
    ContactField, ContactFormState, DeliveryIdentifiers, SubmissionStatus,
};
use crate::modules::contact::application::ports::outgoing::ContactDelivery;
use crate::modules::contact::application::services::{
    ContactFormController, FormError, SubmissionStatusView, SubmitError,
};
use crate::modules::navigation::application::{NavLink, ScrollRequest, SmoothScrollNavigator};
use crate::modules::theme::application::{ThemeMode, ThemeState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub theme: ThemeMode,
    pub dark: bool,
    pub theme_toggle_label: &'static str,
    pub nav_links: Vec<NavLink>,
    pub contact_form: ContactFormState,
    pub submitting: bool,
    pub status: SubmissionStatusView,
}

#[derive(Debug)]
pub struct PageSession {
    theme: ThemeState,
    navigator: SmoothScrollNavigator,
    contact: ContactFormController,
}

impl PageSession {
    pub fn new(delivery: Arc<dyn ContactDelivery>, identifiers: DeliveryIdentifiers) -> Self {
        Self::with_navigator(delivery, identifiers, SmoothScrollNavigator::new())
    }

    pub fn with_navigator(
        delivery: Arc<dyn ContactDelivery>,
        identifiers: DeliveryIdentifiers,
        navigator: SmoothScrollNavigator,
    ) -> Self {
        Self {
            theme: ThemeState::new(),
            navigator,
            contact: ContactFormController::new(delivery, identifiers),
        }
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme.toggle_theme()
    }

    pub fn scroll_to(&self, section_id: &str) -> Option<ScrollRequest> {
        self.navigator.scroll_to(section_id)
    }

    pub fn see_my_work(&self) -> Option<ScrollRequest> {
        self.navigator.call_to_action()
    }

    pub fn scroll_to_top(&self) -> ScrollRequest {
        self.navigator.scroll_to_top()
    }

    pub fn update_field(
        &mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        self.contact.update_field(field, value)
    }

    pub async fn submit(&mut self) -> Result<SubmissionStatus, SubmitError> {
        self.contact.submit().await
    }

    pub fn contact(&self) -> &ContactFormController {
        &self.contact
    }

    pub fn view(&self) -> PageView {
        PageView {
            theme: self.theme.mode(),
            dark: self.theme.mode().is_dark(),
            theme_toggle_label: self.theme.mode().toggle_label(),
            nav_links: self.navigator.nav_links(),
            contact_form: self.contact.form().clone(),
            submitting: self.contact.phase().is_submitting(),
            status: self.contact.status_view(),
        }
    }
}
