use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use utoipa::ToSchema;

/// Scroll duration used by the navigation bar links.
pub const NAV_LINK_SCROLL: Duration = Duration::from_millis(600);

/// Scroll duration used by the hero "see my work" call-to-action.
pub const CALL_TO_ACTION_SCROLL: Duration = Duration::from_millis(700);

/// Named in-page anchors the render layer must expose as scroll targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Resume,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Resume,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Resume => "resume",
            SectionId::Contact => "contact",
        }
    }

    /// Fragment link, e.g. `#contact`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.as_str())
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().trim_start_matches('#');
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(id))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", content = "section", rename_all = "snake_case")]
pub enum ScrollTarget {
    Top,
    Section(SectionId),
}

/// A smooth-scroll the render layer should perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScrollRequest {
    pub target: ScrollTarget,
    #[schema(example = "#projects")]
    pub anchor: String,
    #[schema(example = 600)]
    pub duration_ms: u64,
    pub smooth: bool,
}

impl ScrollRequest {
    pub fn to_section(section: SectionId, duration: Duration) -> Self {
        Self {
            target: ScrollTarget::Section(section),
            anchor: section.anchor(),
            duration_ms: duration.as_millis() as u64,
            smooth: true,
        }
    }

    pub fn to_top(duration: Duration) -> Self {
        Self {
            target: ScrollTarget::Top,
            anchor: "#".to_string(),
            duration_ms: duration.as_millis() as u64,
            smooth: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_registered_section() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn parse_accepts_fragment_form_and_mixed_case() {
        assert_eq!("#contact".parse::<SectionId>(), Ok(SectionId::Contact));
        assert_eq!("Projects".parse::<SectionId>(), Ok(SectionId::Projects));
    }

    #[test]
    fn parse_rejects_unknown_section() {
        let err = "testimonials".parse::<SectionId>().unwrap_err();
        assert_eq!(err, UnknownSection("testimonials".to_string()));
    }

    #[test]
    fn section_scroll_request_points_at_anchor() {
        let request = ScrollRequest::to_section(SectionId::Resume, NAV_LINK_SCROLL);

        assert_eq!(request.anchor, "#resume");
        assert_eq!(request.duration_ms, 600);
        assert!(request.smooth);
    }

    #[test]
    fn scroll_target_serializes_with_kind_tag() {
        let json = serde_json::to_value(ScrollTarget::Section(SectionId::About)).unwrap();
        assert_eq!(json["kind"], "section");
        assert_eq!(json["section"], "about");

        let json = serde_json::to_value(ScrollTarget::Top).unwrap();
        assert_eq!(json["kind"], "top");
    }
}
