use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::AppContext;

/// Errors that can occur when loading the application context.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Failed to read context file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse context file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Context validation failed: {message}")]
    ValidationError { message: String },
}

impl AppContext {
    /// Returns the path to the context file.
    ///
    /// Uses `~/.config/remoteview/context.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn context_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("remoteview").join("context.toml")
    }

    /// Loads the context from the default file.
    ///
    /// - If the file doesn't exist, returns `AppContext::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ContextError> {
        Self::load_from(&Self::context_path())
    }

    /// Loads the context from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ContextError> {
        if !path.exists() {
            return Ok(AppContext::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ContextError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let context: AppContext = toml::from_str(&content).map_err(|e| ContextError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        context.validate()?;
        Ok(context)
    }

    /// Validates the context.
    ///
    /// A configured file must carry both store URLs, since the update
    /// gate's fallback chain is meaningless with blanks.
    pub fn validate(&self) -> Result<(), ContextError> {
        if self.store.native.trim().is_empty() {
            return Err(ContextError::ValidationError {
                message: "store.native URL must not be empty".to_string(),
            });
        }
        if self.store.web.trim().is_empty() {
            return Err(ContextError::ValidationError {
                message: "store.web URL must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
