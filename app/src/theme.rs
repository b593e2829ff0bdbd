//! Light/dark color schemes and the provider shared by both screens.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Active color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Dark text on a light background
    #[default]
    Light,
    /// Light text on a dark background
    Dark,
}

impl ColorScheme {
    /// The other scheme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase name, as used in configuration
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Colors for this scheme
    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// Status bar content style: light content on a dark scheme and vice versa
    #[must_use]
    pub const fn status_bar_style(self) -> Self {
        self.toggled()
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized color scheme name
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown color scheme {0:?} (expected \"light\" or \"dark\")")]
pub struct ParseSchemeError(String);

impl std::str::FromStr for ColorScheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseSchemeError(s.to_string())),
        }
    }
}

/// Named colors of one scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Body text
    pub text: &'static str,
    /// Screen background
    pub background: &'static str,
    /// Icons
    pub icon: &'static str,
    /// Button background
    pub button: &'static str,
    /// Button label
    pub button_text: &'static str,
}

/// Light palette
pub const LIGHT: Palette = Palette {
    text: "black",
    background: "white",
    icon: "black",
    button: "royalblue",
    button_text: "white",
};

/// Dark palette
pub const DARK: Palette = Palette {
    text: "#eee",
    background: "#111",
    icon: "#F05123",
    button: "#222",
    button_text: "#F05123",
};

/// Process-wide holder of the active scheme
///
/// Clones share the same scheme. Screens receive the provider through their
/// environment; renderers read it, and observers can [`subscribe`] to changes.
///
/// [`subscribe`]: ThemeProvider::subscribe
#[derive(Clone, Debug)]
pub struct ThemeProvider {
    scheme: Arc<watch::Sender<ColorScheme>>,
}

impl ThemeProvider {
    /// Creates a provider starting at `initial`, usually the device preference
    #[must_use]
    pub fn new(initial: ColorScheme) -> Self {
        let (scheme, _) = watch::channel(initial);
        Self {
            scheme: Arc::new(scheme),
        }
    }

    /// The active scheme
    #[must_use]
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.borrow()
    }

    /// Colors of the active scheme
    #[must_use]
    pub fn palette(&self) -> &'static Palette {
        self.scheme().palette()
    }

    /// Replaces the active scheme
    pub fn set(&self, scheme: ColorScheme) {
        let previous = self.scheme.send_replace(scheme);
        if previous != scheme {
            tracing::debug!(from = %previous, to = %scheme, "Color scheme changed");
        }
    }

    /// Switches to the other scheme, returning the new one
    pub fn toggle(&self) -> ColorScheme {
        let mut next = ColorScheme::default();
        self.scheme.send_modify(|scheme| {
            *scheme = scheme.toggled();
            next = *scheme;
        });
        tracing::debug!(to = %next, "Color scheme toggled");
        next
    }

    /// Receiver notified on every scheme change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ColorScheme> {
        self.scheme.subscribe()
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes() {
        assert_eq!(ColorScheme::Light.palette().button, "royalblue");
        assert_eq!(ColorScheme::Dark.palette().icon, "#F05123");
        assert_eq!(ColorScheme::Dark.palette().background, "#111");
    }

    #[test]
    fn test_parse_scheme() {
        assert_eq!("Dark".parse(), Ok(ColorScheme::Dark));
        assert_eq!(" light ".parse(), Ok(ColorScheme::Light));
        assert!("sepia".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn test_status_bar_is_inverse() {
        assert_eq!(ColorScheme::Dark.status_bar_style(), ColorScheme::Light);
        assert_eq!(ColorScheme::Light.status_bar_style(), ColorScheme::Dark);
    }

    #[test]
    fn test_toggle_shared_between_clones() {
        let provider = ThemeProvider::new(ColorScheme::Light);
        let other = provider.clone();

        assert_eq!(provider.toggle(), ColorScheme::Dark);
        assert_eq!(other.scheme(), ColorScheme::Dark);

        other.set(ColorScheme::Light);
        assert_eq!(provider.scheme(), ColorScheme::Light);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() -> Result<(), watch::error::RecvError> {
        let provider = ThemeProvider::new(ColorScheme::Light);
        let mut rx = provider.subscribe();

        provider.toggle();
        rx.changed().await?;

        assert_eq!(*rx.borrow(), ColorScheme::Dark);
        Ok(())
    }
}
