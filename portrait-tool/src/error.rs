use std::path::PathBuf;
use thiserror::Error;

/// Error types for conversion and config generation.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Missing ImageMagick dependency '{executable}': {reason}")]
    MissingDependency { executable: String, reason: String },
    #[error("'{0}' source folder either does not exist, or is not a directory")]
    InvalidSource(PathBuf),
    #[error("File conflict: '{0}' already exists, stopping execution")]
    FileConflict(PathBuf),
    #[error("Unable to convert '{path}' to 'dds': {reason}")]
    Conversion { path: PathBuf, reason: String },
    #[error("Invalid settings file '{path}': {reason}")]
    Settings { path: PathBuf, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, ToolError>;
