use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    Encode(String),
    Deliver(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Encode(message) => write!(f, "failed to encode export: {message}"),
            ExportError::Deliver(message) => write!(f, "failed to deliver export: {message}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Destination for a finished export payload. The desktop build writes files;
/// other targets can hand the bytes to whatever "download" means there.
pub trait ExportSink: Send + Sync {
    fn deliver(&self, file_name: &str, payload: &str) -> Result<PathBuf, ExportError>;
}
