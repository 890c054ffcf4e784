//! Semantic color theme for terminal output
//!
//! - `pass` => green
//! - `fail` => red
//! - `blocked` => yellow
//! - `category` => bold blue, section headers
//! - `comment` => dimmed

use std::io::IsTerminal;
use std::sync::LazyLock;

use owo_colors::{OwoColorize, Style};
use testpad_core::{ResultValue, StepKind};

/// Semantic color definitions for terminal output
pub struct SemanticColors {
    pub pass: Style,
    pub fail: Style,
    pub blocked: Style,
    pub category: Style,
    pub comment: Style,
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            pass: Style::new().green(),
            fail: Style::new().red(),
            blocked: Style::new().yellow(),
            category: Style::new().blue().bold(),
            comment: Style::new().dimmed(),
        }
    }
}

impl SemanticColors {
    /// Style for a recorded result
    pub fn for_result(&self, value: ResultValue) -> Style {
        match value {
            ResultValue::Pass => self.pass,
            ResultValue::Fail => self.fail,
            ResultValue::Blocked => self.blocked,
        }
    }

    /// Style for a row's text, by kind
    pub fn for_kind(&self, kind: StepKind) -> Style {
        match kind {
            StepKind::Category => self.category,
            StepKind::Comment => self.comment,
            StepKind::Step => Style::new(),
        }
    }
}

/// Global default theme
pub static COLORS: LazyLock<SemanticColors> = LazyLock::new(SemanticColors::default);

/// Paint text with a style when stdout is a terminal
pub fn paint(text: &str, style: Style) -> String {
    if std::io::stdout().is_terminal() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_keeps_text() {
        let painted = paint("PASS", COLORS.for_result(ResultValue::Pass));
        assert!(painted.contains("PASS"));
    }

    #[test]
    fn test_kind_styles_are_accessible() {
        for kind in [StepKind::Category, StepKind::Comment, StepKind::Step] {
            let painted = paint("row", COLORS.for_kind(kind));
            assert!(painted.contains("row"));
        }
    }
}
