use std::fs;
use std::path::{Path, PathBuf};

use crate::modules::content::application::domain::entities::PortfolioContent;
use crate::modules::content::application::domain::errors::ContentError;
use crate::modules::content::application::ports::outgoing::ContentSource;

/// Reads portfolio content from a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileContentSource {
    path: PathBuf,
}

impl JsonFileContentSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ContentSource for JsonFileContentSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<PortfolioContent, ContentError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| ContentError::Io(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_str(&raw).map_err(|e| ContentError::Parse(e.to_string()))
    }
}
