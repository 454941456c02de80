use std::path::PathBuf;

use thiserror::Error;

/// Reasons a render gives up and falls back to plain text.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("HTML parser failed to read input: {0}")]
    Parse(#[from] std::io::Error),

    #[error("Malformed HTML: {0}")]
    Malformed(String),

    #[error("Maximum nesting depth ({max_depth}) exceeded")]
    NestingTooDeep { max_depth: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid color value '{value}': expected #rrggbb")]
    InvalidColor { value: String },
}

/// The file operation that failed, used in user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Load,
    Save,
    Export,
}

impl std::fmt::Display for FileOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FileOp::Load => "load",
            FileOp::Save => "save",
            FileOp::Export => "export",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
#[error("Failed to {op} file {}: {source}", .path.display())]
pub struct FileError {
    pub op: FileOp,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
