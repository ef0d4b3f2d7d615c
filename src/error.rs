use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeekLogError>;

#[derive(Error, Debug)]
pub enum WeekLogError {
    #[error("Failed to parse week log: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unknown time of day: {0}")]
    UnknownTimeOfDay(String),
}
