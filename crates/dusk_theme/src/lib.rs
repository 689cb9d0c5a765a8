//! Dusk Theme
//!
//! The theme vocabulary the transition engine switches between, plus the two
//! host capabilities that depend on it:
//!
//! - [`ThemeName`]: light or dark
//! - [`StatusBar`]: a setter for the platform status bar style
//! - [`SystemPreference`]: where the initial scheme comes from
//!
//! Token definitions and per-screen styling are the application's business;
//! this crate only names the two states.

pub mod preference;
pub mod scheme;
pub mod status_bar;

pub use preference::{initial_theme, FixedPreference, SystemPreference};
pub use scheme::{ParseThemeError, ThemeName};
pub use status_bar::{NoStatusBar, StatusBar, StatusBarStyle};
