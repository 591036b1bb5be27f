use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use utoipa::ToSchema;

use crate::modules::navigation::application::domain::section::{
    ScrollRequest, SectionId, CALL_TO_ACTION_SCROLL, NAV_LINK_SCROLL,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NavLink {
    #[schema(example = "Projects")]
    pub label: String,
    pub section: SectionId,
    #[schema(example = "#projects")]
    pub anchor: String,
    #[schema(example = 600)]
    pub duration_ms: u64,
}

const NAV_BAR: [(&str, SectionId); 5] = [
    ("About", SectionId::About),
    ("Skills", SectionId::Skills),
    ("Projects", SectionId::Projects),
    ("Resume", SectionId::Resume),
    ("Contact", SectionId::Contact),
];

/// Resolves section identifiers into smooth-scroll requests.
///
/// Only registered anchors resolve. Unknown or unregistered ids yield `None`.
#[derive(Debug, Clone)]
pub struct SmoothScrollNavigator {
    registered: Vec<SectionId>,
    link_duration: Duration,
}

impl Default for SmoothScrollNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl SmoothScrollNavigator {
    pub fn new() -> Self {
        Self::with_sections(SectionId::ALL.to_vec())
    }

    pub fn with_sections(registered: Vec<SectionId>) -> Self {
        Self {
            registered,
            link_duration: NAV_LINK_SCROLL,
        }
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.registered
    }

    pub fn is_registered(&self, section: SectionId) -> bool {
        self.registered.contains(&section)
    }

    pub fn scroll_to(&self, section_id: &str) -> Option<ScrollRequest> {
        match section_id.parse::<SectionId>() {
            Ok(section) => self.scroll_to_section(section),
            Err(e) => {
                debug!(error = %e, "Ignoring scroll to unknown section");
                None
            }
        }
    }

    pub fn scroll_to_section(&self, section: SectionId) -> Option<ScrollRequest> {
        self.scroll_with_duration(section, self.link_duration)
    }

    /// The hero "see my work" button.
    pub fn call_to_action(&self) -> Option<ScrollRequest> {
        self.scroll_with_duration(SectionId::Projects, CALL_TO_ACTION_SCROLL)
    }

    /// The compact-layout "Top" button.
    pub fn scroll_to_top(&self) -> ScrollRequest {
        ScrollRequest::to_top(self.link_duration)
    }

    /// Navigation bar entries, in display order, limited to registered anchors.
    pub fn nav_links(&self) -> Vec<NavLink> {
        NAV_BAR
            .iter()
            .filter(|(_, section)| self.is_registered(*section))
            .map(|(label, section)| NavLink {
                label: label.to_string(),
                section: *section,
                anchor: section.anchor(),
                duration_ms: self.link_duration.as_millis() as u64,
            })
            .collect()
    }

    fn scroll_with_duration(&self, section: SectionId, duration: Duration) -> Option<ScrollRequest> {
        if !self.is_registered(section) {
            debug!(section = %section, "Ignoring scroll to unregistered section");
            return None;
        }
        Some(ScrollRequest::to_section(section, duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::navigation::application::domain::section::ScrollTarget;

    #[test]
    fn scroll_to_known_section_uses_link_duration() {
        let navigator = SmoothScrollNavigator::new();

        let request = navigator.scroll_to("skills").expect("skills is registered");

        assert_eq!(request.target, ScrollTarget::Section(SectionId::Skills));
        assert_eq!(request.anchor, "#skills");
        assert_eq!(request.duration_ms, 600);
    }

    #[test]
    fn scroll_to_unknown_section_is_a_no_op() {
        let navigator = SmoothScrollNavigator::new();

        assert!(navigator.scroll_to("blog").is_none());
        assert!(navigator.scroll_to("").is_none());
    }

    #[test]
    fn scroll_to_unregistered_section_is_a_no_op() {
        let navigator =
            SmoothScrollNavigator::with_sections(vec![SectionId::Hero, SectionId::Contact]);

        assert!(navigator.scroll_to("projects").is_none());
        assert!(navigator.call_to_action().is_none());
        assert!(navigator.scroll_to("contact").is_some());
    }

    #[test]
    fn call_to_action_scrolls_to_projects_slower() {
        let request = SmoothScrollNavigator::new().call_to_action().unwrap();

        assert_eq!(request.target, ScrollTarget::Section(SectionId::Projects));
        assert_eq!(request.duration_ms, 700);
    }

    #[test]
    fn scroll_to_top_targets_page_start() {
        let request = SmoothScrollNavigator::new().scroll_to_top();
        assert_eq!(request.target, ScrollTarget::Top);
        assert!(request.smooth);
    }

    #[test]
    fn nav_links_follow_display_order() {
        let labels: Vec<_> = SmoothScrollNavigator::new()
            .nav_links()
            .into_iter()
            .map(|link| link.label)
            .collect();

        assert_eq!(labels, vec!["About", "Skills", "Projects", "Resume", "Contact"]);
    }

    #[test]
    fn nav_links_skip_unregistered_sections() {
        let navigator =
            SmoothScrollNavigator::with_sections(vec![SectionId::About, SectionId::Contact]);

        let sections: Vec<_> = navigator.nav_links().into_iter().map(|l| l.section).collect();

        assert_eq!(sections, vec![SectionId::About, SectionId::Contact]);
    }
}
