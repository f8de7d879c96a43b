//! Declarative visual theme configuration.
//!
//! This crate is consumed by the styling layer only; nothing in the state
//! stores reads from or writes to it.

pub mod error;
pub mod settings;
pub mod store;

pub use error::{ThemeError, ThemeResult};
pub use settings::{
    DEFAULT_PLUGIN, DEFAULT_THEME_NAME, ThemeDefinition, ThemePalette, ThemeSettings,
};
pub use store::{THEME_DIRECTORY_NAME, THEME_FILE_NAME, ThemeStore};
