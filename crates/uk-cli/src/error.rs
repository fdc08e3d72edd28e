//! Error types for uk-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from uk-component
    #[error(transparent)]
    Component(#[from] uk_component::Error),

    /// Error from uk-kconfig
    #[error(transparent)]
    KConfig(#[from] uk_kconfig::Error),

    /// Project file not found
    #[error("project file not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    /// Project file is not valid TOML or has no valid platform
    #[error("failed to parse project file: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON rendering error
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Tracing subscriber setup error
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
