use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::application::domain::errors::ContentError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    #[schema(example = "Python")]
    pub name: String,
    /// Proficiency, 0 to 100
    #[schema(example = 85, maximum = 100)]
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectCard {
    #[schema(example = "Pulse - Analytics Dashboard")]
    pub title: String,
    pub description: String,
    #[schema(example = "#")]
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimelineEntry {
    #[schema(example = "2024 - 2025")]
    pub date_range: String,
    #[schema(example = "Full-Stack Developer")]
    pub title: String,
    pub organization: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileStat {
    #[schema(example = "2+")]
    pub value: String,
    #[schema(example = "Projects")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialLink {
    #[schema(example = "github")]
    pub network: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub stats: Vec<ProfileStat>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub footer: String,
}

/// Everything the page displays that is not user state. Loaded once at
/// startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PortfolioContent {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub projects: Vec<ProjectCard>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl PortfolioContent {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::MissingField("profile.name".to_string()));
        }

        for (i, skill) in self.skills.iter().enumerate() {
            if skill.name.trim().is_empty() {
                return Err(ContentError::MissingField(format!("skills[{}].name", i)));
            }
            if skill.percentage > 100 {
                return Err(ContentError::InvalidSkill {
                    name: skill.name.clone(),
                    percentage: skill.percentage,
                });
            }
        }

        for (i, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(ContentError::MissingField(format!("projects[{}].title", i)));
            }
        }

        for (i, entry) in self.timeline.iter().enumerate() {
            if entry.title.trim().is_empty() {
                return Err(ContentError::MissingField(format!("timeline[{}].title", i)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> PortfolioContent {
        PortfolioContent {
            profile: Profile {
                name: "Pradeep Parihar".to_string(),
                ..Profile::default()
            },
            skills: vec![Skill {
                name: "Python".to_string(),
                percentage: 85,
            }],
            projects: vec![ProjectCard {
                title: "Pulse".to_string(),
                description: "Realtime metrics dashboard".to_string(),
                link: "#".to_string(),
                tags: vec!["React".to_string()],
            }],
            ..PortfolioContent::default()
        }
    }

    #[test]
    fn accepts_well_formed_content() {
        assert!(content().validate().is_ok());
    }

    #[test]
    fn accepts_boundary_percentages() {
        let mut content = content();
        content.skills = vec![
            Skill {
                name: "None".to_string(),
                percentage: 0,
            },
            Skill {
                name: "All".to_string(),
                percentage: 100,
            },
        ];

        assert!(content.validate().is_ok());
    }

    #[test]
    fn rejects_percentage_above_hundred() {
        let mut content = content();
        content.skills[0].percentage = 101;

        assert_eq!(
            content.validate(),
            Err(ContentError::InvalidSkill {
                name: "Python".to_string(),
                percentage: 101
            })
        );
    }

    #[test]
    fn rejects_blank_project_title() {
        let mut content = content();
        content.projects[0].title = "  ".to_string();

        assert_eq!(
            content.validate(),
            Err(ContentError::MissingField("projects[0].title".to_string()))
        );
    }

    #[test]
    fn rejects_missing_profile_name() {
        let mut content = content();
        content.profile.name.clear();

        assert!(matches!(
            content.validate(),
            Err(ContentError::MissingField(field)) if field == "profile.name"
        ));
    }
}
