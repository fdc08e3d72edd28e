//! Error types for uk-kconfig

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `.config` line that is neither an assignment nor a recognized comment.
    #[error("malformed .config line {line}: {content:?}")]
    ParseLine { line: usize, content: String },

    /// A symbol that cannot be used as a KConfig key.
    #[error("invalid KConfig symbol '{symbol}': {reason}")]
    InvalidSymbol { symbol: String, reason: String },

    /// A `KEY=VALUE` entry without the `=` separator.
    #[error("invalid KConfig assignment {entry:?}: expected KEY=VALUE")]
    InvalidAssignment { entry: String },

    /// Failed to parse an option menu from TOML.
    #[error("failed to parse option menu: {0}")]
    MenuParse(#[from] toml::de::Error),

    /// Option menu file not found at the expected path.
    #[error("option menu not found: {0}")]
    MenuNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
