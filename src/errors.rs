// cs2modrewrite-rust/src/errors.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read profile '{path}': {source}")]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[!] {name} is malformed. Are you sure {value} is a valid URL?")]
    MalformedUrl { name: String, value: String },

    #[error("Logging setup failed: {0}")]
    LoggingSetup(String),
}

// Define a type alias for Result<T, RewriteError>
pub type Result<T> = std::result::Result<T, RewriteError>;
