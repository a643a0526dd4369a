//! Console front end
//!
//! Line-oriented terminal interface for the game, styled with crossterm

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::Severity;
use crossterm::style::{style, Color, Stylize};

/// Color scheme for the game
#[derive(Debug, Clone)]
pub struct Theme {
    pub enabled: bool,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            enabled: true,
            fg: Color::White,
            accent: Color::Cyan,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            border: Color::DarkGrey,
            header: Color::Magenta,
        }
    }
}

impl Theme {
    /// Theme that never emits escape sequences
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Get color for severity level
    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Info => self.fg,
            Severity::Discovery => self.success,
            Severity::Warning => self.warning,
            Severity::Critical => self.alert,
        }
    }

    /// A tagged message line, e.g. `◆ [CLUE] Torn page`
    pub fn message(&self, severity: Severity, text: &str) -> String {
        let tag = format!("{} [{}]", severity.symbol(), severity);
        format!("{} {}", self.bold(&tag, self.severity_color(severity)), text)
    }
}

/// Title banner
pub const LOGO: &str = r#"
╔══════════════════════════════════════════════════╗
║                 DETECTIVE  QUEST                 ║
║            Exploring the Mysterious Mansion      ║
╚══════════════════════════════════════════════════╝
"#;

/// Key help shown at the first junction
pub const HELP_TEXT: &str = "Controls: [e] left passage  [d] right passage  [s] leave the mansion";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_has_no_escapes() {
        let theme = Theme::plain();
        assert_eq!(theme.paint("Hall", theme.accent), "Hall");
        assert_eq!(theme.message(Severity::Discovery, "Ink"), "◆ [CLUE] Ink");
    }

    #[test]
    fn test_colored_theme_wraps_text() {
        let theme = Theme::default();
        let painted = theme.paint("Hall", theme.accent);
        assert!(painted.contains("Hall"));
        // crossterm itself honours NO_COLOR
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(painted.contains('\u{1b}'));
        }
    }
}
