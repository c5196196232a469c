use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    #[error("failed to load config {}: {reason}", .path.display())]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("failed to save config {}: {reason}", .path.display())]
    ConfigSave { path: PathBuf, reason: String },

    #[error("failed to start `{command}`: {source}")]
    CommandStart {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("autostart {operation} failed: {reason}")]
    Registry { operation: &'static str, reason: String },

    #[error("text contains a NUL character and cannot be displayed: {0:?}")]
    Encoding(String),

    #[error("failed to open log file {}: {source}", .path.display())]
    LogOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn is_missing_config(&self) -> bool {
        matches!(self, Error::ConfigMissing(_))
    }
}
