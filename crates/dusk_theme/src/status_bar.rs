//! Status bar styling capability

use crate::scheme::ThemeName;

/// Style of the status bar content (icons and text)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusBarStyle {
    /// Light content, meant for dark backgrounds
    Light,
    /// Dark content, meant for light backgrounds
    Dark,
}

impl From<ThemeName> for StatusBarStyle {
    fn from(theme: ThemeName) -> Self {
        match theme {
            ThemeName::Light => StatusBarStyle::Light,
            ThemeName::Dark => StatusBarStyle::Dark,
        }
    }
}

/// Host setter for the status bar style
pub trait StatusBar: Send + Sync {
    fn set_style(&self, style: StatusBarStyle);
}

/// For hosts without a status bar
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStatusBar;

impl StatusBar for NoStatusBar {
    fn set_style(&self, style: StatusBarStyle) {
        tracing::trace!(?style, "status bar style ignored");
    }
}
