//! Visual theme and its owning context
//!
//! Components never reach for a global theme. The runner owns a
//! [`ThemeContext`]; everything else gets the current [`Theme`] passed in, or
//! subscribes to changes.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tokio::sync::watch;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Theatrical,
    Tech,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Theatrical => ThemeMode::Tech,
            ThemeMode::Tech => ThemeMode::Theatrical,
        }
    }
}

/// Primary accent color per mode, as hex strings (`#RRGGBB`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub theatrical: String,
    pub tech: String,
}

impl ThemeColors {
    pub fn for_mode(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Theatrical => &self.theatrical,
            ThemeMode::Tech => &self.tech,
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            theatrical: "#FFD700".to_owned(),
            tech: "#00FFFF".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub primary_color: String,
}

impl Theme {
    pub fn new(mode: ThemeMode, colors: &ThemeColors) -> Self {
        Self {
            mode,
            primary_color: colors.for_mode(mode).to_owned(),
        }
    }

    pub fn is_theatrical(&self) -> bool {
        self.mode == ThemeMode::Theatrical
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default(), &ThemeColors::default())
    }
}

/// Single owner of the process-wide theme.
///
/// Only [`ThemeContext::set_mode`] changes the theme; subscribers are notified
/// through a `watch` channel and always observe the latest value.
#[derive(Debug)]
pub struct ThemeContext {
    sender: watch::Sender<Theme>,
    colors: ThemeColors,
}

impl ThemeContext {
    pub fn new(mode: ThemeMode, colors: ThemeColors) -> Self {
        let (sender, _) = watch::channel(Theme::new(mode, &colors));
        Self { sender, colors }
    }

    pub fn current(&self) -> Theme {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.sender.subscribe()
    }

    /// Switch to `mode`. Returns `true` if subscribers were notified.
    pub fn set_mode(&self, mode: ThemeMode) -> bool {
        let next = Theme::new(mode, &self.colors);
        self.sender.send_if_modified(|theme| {
            if *theme == next {
                false
            } else {
                *theme = next;
                true
            }
        })
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(ThemeMode::default(), ThemeColors::default())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_mode_toggle() {
        assert_eq!(ThemeMode::Theatrical.toggled(), ThemeMode::Tech);
        assert_eq!(ThemeMode::Tech.toggled(), ThemeMode::Theatrical);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(ThemeMode::from_str("tech"), Ok(ThemeMode::Tech));
        assert_eq!(ThemeMode::from_str("theatrical"), Ok(ThemeMode::Theatrical));
        assert!(ThemeMode::from_str("neon").is_err());
    }

    #[test]
    fn test_theme_takes_mode_color() {
        let colors = ThemeColors::default();
        assert_eq!(Theme::new(ThemeMode::Tech, &colors).primary_color, "#00FFFF");
        assert_eq!(
            Theme::new(ThemeMode::Theatrical, &colors).primary_color,
            "#FFD700"
        );
    }

    #[tokio::test]
    async fn test_context_notifies_subscribers() {
        let context = ThemeContext::default();
        let mut rx = context.subscribe();

        assert!(context.set_mode(ThemeMode::Tech));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().mode, ThemeMode::Tech);
        assert_eq!(context.current().mode, ThemeMode::Tech);
    }

    #[test]
    fn test_context_ignores_same_mode() {
        let context = ThemeContext::default();
        let rx = context.subscribe();

        assert!(!context.set_mode(ThemeMode::Theatrical));
        assert!(!rx.has_changed().unwrap());
    }
}
