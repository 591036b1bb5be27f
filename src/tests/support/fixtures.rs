use crate::modules::content::application::domain::entities::{
    PortfolioContent, Profile, ProfileStat, ProjectCard, Skill, SocialLink, TimelineEntry,
};

pub fn sample_content() -> PortfolioContent {
    PortfolioContent {
        profile: Profile {
            name: "Pradeep Parihar".to_string(),
            initials: "PP".to_string(),
            headline: "Data analyst & Python developer".to_string(),
            stats: vec![ProfileStat {
                value: "2+".to_string(),
                label: "Projects".to_string(),
            }],
            socials: vec![SocialLink {
                network: "github".to_string(),
                url: "https://github.com".to_string(),
            }],
            ..Profile::default()
        },
        skills: vec![
            Skill {
                name: "Python".to_string(),
                percentage: 85,
            },
            Skill {
                name: "SQL".to_string(),
                percentage: 75,
            },
        ],
        tools: vec!["pandas".to_string(), "fastAPI".to_string()],
        projects: vec![ProjectCard {
            title: "Pulse - Analytics Dashboard".to_string(),
            description: "Realtime metrics dashboard".to_string(),
            link: "#".to_string(),
            tags: vec!["React".to_string(), "D3".to_string()],
        }],
        timeline: vec![TimelineEntry {
            date_range: "2025 - Present".to_string(),
            title: "Data Analyst Intern".to_string(),
            organization: "H+".to_string(),
            description: "Dashboards and reporting".to_string(),
        }],
        testimonials: vec![],
    }
}
