//! Colour themes for Unwind.
//!
//! Two palettes share one set of semantic [`Element`]s so views never pick raw
//! colours themselves.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Cream background with rose accents (default)
    #[default]
    Blossom,
    /// Dark evening variant
    Dusk,
}

#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub selection: Color,
    pub success: Color,
    pub error: Color,
}

/// UI element types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Text,
    Title,
    Border,
    /// Selected option or focused input
    Highlight,
    /// Primary buttons and the active tab
    Accent,
    /// Hints, disabled buttons, days outside the displayed month
    Inactive,
    /// Practiced days on the calendar
    Success,
    /// Validation messages
    Error,
    Background,
}

#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::Blossom => ColorPalette {
                background: Color::Rgb(252, 249, 247), // #fcf9f7
                foreground: Color::Rgb(31, 41, 55),    // #1f2937 (gray-800)
                accent: Color::Rgb(244, 63, 94),       // #f43f5e (rose-500)
                muted: Color::Rgb(156, 163, 175),      // #9ca3af (gray-400)
                border: Color::Rgb(229, 231, 235),     // #e5e7eb (gray-200)
                selection: Color::Rgb(255, 228, 230),  // #ffe4e6 (rose-100)
                success: Color::Rgb(34, 197, 94),      // #22c55e (green-500)
                error: Color::Rgb(239, 68, 68),        // #ef4444 (red-500)
            },
            ThemeVariant::Dusk => ColorPalette {
                background: Color::Rgb(28, 25, 34),
                foreground: Color::Rgb(236, 232, 240),
                accent: Color::Rgb(251, 113, 133), // #fb7185 (rose-400)
                muted: Color::Rgb(120, 113, 132),
                border: Color::Rgb(72, 64, 84),
                selection: Color::Rgb(76, 29, 47),
                success: Color::Rgb(74, 222, 128),
                error: Color::Rgb(248, 113, 113),
            },
        };

        Self { variant, colors }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn colors(&self) -> &ColorPalette {
        &self.colors
    }

    pub fn toggle(&mut self) {
        let next = match self.variant {
            ThemeVariant::Blossom => ThemeVariant::Dusk,
            ThemeVariant::Dusk => ThemeVariant::Blossom,
        };
        *self = Self::new(next);
    }

    pub fn ratatui_style(&self, element: Element) -> Style {
        let base = Style::default().bg(self.colors.background);
        match element {
            Element::Text | Element::Background => base.fg(self.colors.foreground),
            Element::Title => base.fg(self.colors.foreground).add_modifier(Modifier::BOLD),
            Element::Border => base.fg(self.colors.border),
            Element::Highlight => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.selection)
                .add_modifier(Modifier::BOLD),
            Element::Accent => base.fg(self.colors.accent).add_modifier(Modifier::BOLD),
            Element::Inactive => base.fg(self.colors.muted),
            Element::Success => Style::default()
                .fg(self.colors.background)
                .bg(self.colors.success)
                .add_modifier(Modifier::BOLD),
            Element::Error => base.fg(self.colors.error),
        }
    }

    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    pub fn title_style(&self) -> Style {
        self.ratatui_style(Element::Title)
    }

    pub fn highlight_style(&self) -> Style {
        self.ratatui_style(Element::Highlight)
    }

    pub fn accent_style(&self) -> Style {
        self.ratatui_style(Element::Accent)
    }

    pub fn inactive_style(&self) -> Style {
        self.ratatui_style(Element::Inactive)
    }

    pub fn error_style(&self) -> Style {
        self.ratatui_style(Element::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut theme = Theme::default();
        assert_eq!(theme.variant(), ThemeVariant::Blossom);
        theme.toggle();
        assert_eq!(theme.variant(), ThemeVariant::Dusk);
        theme.toggle();
        assert_eq!(theme.variant(), ThemeVariant::Blossom);
    }

    #[test]
    fn test_success_uses_palette() {
        let theme = Theme::new(ThemeVariant::Dusk);
        assert_eq!(
            theme.ratatui_style(Element::Success).bg,
            Some(theme.colors().success)
        );
    }
}
