use std::sync::Arc;
use tracing::info;

use crate::modules::content::application::domain::entities::{
    PortfolioContent, Profile, ProjectCard, Skill, Testimonial, TimelineEntry,
};
use crate::modules::content::application::domain::errors::ContentError;
use crate::modules::content::application::ports::outgoing::ContentSource;

/// Read-only view over the loaded portfolio content.
#[derive(Debug, Clone)]
pub struct ContentRegistry {
    content: Arc<PortfolioContent>,
}

impl ContentRegistry {
    pub fn new(content: PortfolioContent) -> Result<Self, ContentError> {
        content.validate()?;
        Ok(Self {
            content: Arc::new(content),
        })
    }

    pub fn load(source: &dyn ContentSource) -> Result<Self, ContentError> {
        let registry = Self::new(source.load()?)?;
        info!(
            source = %source.describe(),
            skills = registry.skills().len(),
            projects = registry.projects().len(),
            timeline = registry.timeline().len(),
            "Portfolio content loaded"
        );
        Ok(registry)
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    pub fn profile(&self) -> &Profile {
        &self.content.profile
    }

    pub fn skills(&self) -> &[Skill] {
        &self.content.skills
    }

    pub fn tools(&self) -> &[String] {
        &self.content.tools
    }

    pub fn projects(&self) -> &[ProjectCard] {
        &self.content.projects
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.content.timeline
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.content.testimonials
    }
}
