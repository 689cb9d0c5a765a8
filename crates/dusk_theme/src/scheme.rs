//! Light/dark scheme names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the two visual states an application can be in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    /// The other scheme
    pub fn toggle(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeName::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names neither scheme
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme `{0}` (expected `light` or `dark`)")]
pub struct ParseThemeError(pub String);

impl FromStr for ThemeName {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ThemeName::Light.toggle(), ThemeName::Dark);
        assert_eq!(ThemeName::Dark.toggle(), ThemeName::Light);
        assert_eq!(ThemeName::Light.toggle().toggle(), ThemeName::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<ThemeName>(), Ok(ThemeName::Dark));
        assert_eq!(" light ".parse::<ThemeName>(), Ok(ThemeName::Light));
        assert!("sepia".parse::<ThemeName>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        #[derive(Deserialize)]
        struct Doc {
            theme: ThemeName,
        }
        let doc: Doc = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(doc.theme, ThemeName::Dark);
    }
}
