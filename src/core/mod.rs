//! Core module - configuration, errors, CLI and window setup
//!
//! # Resources
//!
//! - [`GameSettings`] - presentation settings loaded from JSON
//! - [`WindowConfig`] - window size derived from the settings
//! - [`SettingsSource`] - where the settings came from
//!
//! # Startup Flow
//!
//! ```text
//! Cli::parse -> load_settings -> CorePlugin { settings, source } -> App::run
//! ```

pub mod cli;
pub mod error;
pub mod error_handling;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod window_config;

// Re-export commonly used items
pub use cli::Cli;
pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use resources::*;
pub use settings_persistence::{load_settings, save_settings, SettingsSource};
pub use window_config::WindowConfig;
