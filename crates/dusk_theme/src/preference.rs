//! System dark/light preference

use crate::scheme::ThemeName;

/// Source of the platform's preferred scheme
pub trait SystemPreference: Send + Sync {
    /// The preferred scheme, or `None` when the platform does not say
    fn color_scheme(&self) -> Option<ThemeName>;
}

/// A preference that never changes
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedPreference(pub Option<ThemeName>);

impl SystemPreference for FixedPreference {
    fn color_scheme(&self) -> Option<ThemeName> {
        self.0
    }
}

/// The theme an application starts in: the system preference, else light
pub fn initial_theme(preference: &dyn SystemPreference) -> ThemeName {
    let theme = preference.color_scheme().unwrap_or_default();
    tracing::debug!(%theme, "initial theme from system preference");
    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_theme_falls_back_to_light() {
        assert_eq!(initial_theme(&FixedPreference(None)), ThemeName::Light);
        assert_eq!(
            initial_theme(&FixedPreference(Some(ThemeName::Dark))),
            ThemeName::Dark
        );
    }
}
