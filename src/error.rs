//! Error types for RuleDeck
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.

use thiserror::Error;

/// Main error type for RuleDeck
#[derive(Error, Debug)]
pub enum RuleDeckError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Page rendering errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Output writing errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Errors that occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse the configuration file
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize the configuration
    #[error("Failed to serialize config: {message}")]
    Serialize {
        /// Description of the failure
        message: String,
    },
}

/// Errors that occur while loading a rule catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the catalog file
    #[error("Failed to read catalog '{path}': {source}")]
    FileRead {
        /// Path to the catalog file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The catalog is not valid JSON
    #[error("Invalid JSON in catalog '{path}': {source}")]
    Json {
        /// Path to the catalog file
        path: String,
        /// The underlying parse error
        source: serde_json::Error,
    },

    /// The catalog is not valid YAML
    #[error("Invalid YAML in catalog '{path}': {source}")]
    Yaml {
        /// Path to the catalog file
        path: String,
        /// The underlying parse error
        source: serde_yaml::Error,
    },

    /// The catalog file extension is not supported
    #[error("Unsupported catalog format '{path}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat {
        /// Path to the catalog file
        path: String,
    },
}

/// Errors that occur while rendering pages
#[derive(Error, Debug)]
pub enum RenderError {
    /// The page template failed to render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// JSON serialization of the release payload failed
    #[error("Failed to serialize payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The release payload does not match its schema
    #[error("Payload failed schema validation: {message}")]
    SchemaValidation {
        /// Validation error details
        message: String,
    },

    /// The highlighting theme is unknown
    #[error("Unknown highlighting theme '{name}'")]
    UnknownTheme {
        /// Theme name from configuration
        name: String,
    },
}

/// Errors that occur while writing to the clipboard
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No clipboard helper program is available
    #[error("No clipboard helper found (tried: {tried})")]
    Unavailable {
        /// Programs that were looked up
        tried: String,
    },

    /// The clipboard helper could not be started
    #[error("Failed to run clipboard helper '{program}': {source}")]
    Spawn {
        /// Helper program name
        program: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The text could not be handed to a running helper
    #[error("Clipboard helper '{program}' did not take the text: {source}")]
    Write {
        /// Helper program name
        program: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The clipboard helper exited unsuccessfully
    #[error("Clipboard helper '{program}' exited with status {status}")]
    Failed {
        /// Helper program name
        program: String,
        /// Exit status description
        status: String,
    },

    /// The write task was cancelled or panicked
    #[error("Clipboard write task aborted: {0}")]
    Aborted(#[from] tokio::task::JoinError),
}

/// Errors that occur while writing command output
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to write an output file
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the output file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

// Allow conversion from toml errors for convenience
impl From<toml::de::Error> for RuleDeckError {
    fn from(err: toml::de::Error) -> Self {
        RuleDeckError::Config(ConfigError::Parse(err))
    }
}

impl From<toml::ser::Error> for RuleDeckError {
    fn from(err: toml::ser::Error) -> Self {
        RuleDeckError::Config(ConfigError::Serialize {
            message: err.to_string(),
        })
    }
}
