use crate::modules::content::application::domain::entities::PortfolioContent;
use crate::modules::content::application::domain::errors::ContentError;

pub trait ContentSource: Send + Sync {
    /// Where the content comes from, for logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<PortfolioContent, ContentError>;
}
