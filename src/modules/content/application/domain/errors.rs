#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read content: {0}")]
    Io(String),

    #[error("Failed to parse content: {0}")]
    Parse(String),

    #[error("Skill '{name}' has percentage {percentage}, expected 0-100")]
    InvalidSkill { name: String, percentage: u8 },

    #[error("Missing required content field: {0}")]
    MissingField(String),
}
