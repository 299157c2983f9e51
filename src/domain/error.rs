//! Error types for pillbox.
//!
//! This module defines the centralized error type [`PillboxError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Labels themselves never fail: construction, measurement and rendering are
//! total. Errors only arise at the edges, when painting to a writer, loading a
//! theme file or parsing configuration.

use thiserror::Error;

/// The main error type for pillbox operations.
///
/// # Examples
///
/// ```
/// use pillbox::PillboxError;
///
/// fn validate_width(width: usize) -> Result<(), PillboxError> {
///     if width == 0 {
///         return Err(PillboxError::Config("width must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_width(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum PillboxError {
    /// Writing rendered output failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme loading or parsing failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML content does not
    /// describe a valid palette.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    ///
    /// Occurs when a configuration value is present but malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A color name or hex value could not be parsed.
    #[error("Invalid color: {0}")]
    Color(String),
}

/// A specialized `Result` type for pillbox operations.
pub type Result<T> = std::result::Result<T, PillboxError>;
