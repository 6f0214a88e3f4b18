//! Error types for the MusicianHub plugin.
//!
//! This module defines the centralized error type [`HubError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. Only startup
//! work (seed data, translation tables, themes) can fail; command handlers never
//! return errors.

use thiserror::Error;

/// The main error type for MusicianHub operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use musicianhub::HubError;
///
/// fn validate_config() -> Result<(), HubError> {
///     Err(HubError::Config("location must not be empty".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum HubError {
    /// Seed data could not be decoded.
    ///
    /// Wraps JSON errors from the embedded seed or a configured `seed_file`.
    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),

    /// Two seed artists share a name. Names identify profiles, so the seed
    /// is rejected as a whole.
    #[error("Duplicate artist name in seed: {0:?}")]
    DuplicateArtist(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A translation table could not be parsed.
    #[error("Locale error: {0}")]
    Locale(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A language code outside the supported set was requested.
    #[error("Unsupported language code: {0:?}")]
    UnsupportedLanguage(String),
}

/// A specialized `Result` type for MusicianHub operations.
pub type Result<T> = std::result::Result<T, HubError>;
