//! Error types for core module
//!
//! Provides custom error types for core functionality including settings
//! persistence, settings validation and color parsing.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Color string in the settings that is not a hex color
    #[error("Invalid color {value:?}: {message}")]
    InvalidColor { value: String, message: String },

    /// Numeric setting outside the range the board and window can handle
    #[error("Setting {field} = {value} is out of range ({min}..={max})")]
    SettingOutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
