pub mod color;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

pub use color::ColorPalette;

/// Built-in themes selectable from the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    #[default]
    GruvboxDark,
    GruvboxLight,
}

/// Colors and derived styles used by every view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub palette: ColorPalette,
}

impl Theme {
    /// Create a Gruvbox dark theme
    pub fn gruvbox_dark() -> Self {
        Self {
            name: "Gruvbox Dark".to_string(),
            description: "Retro groove dark theme with warm, earthy colors".to_string(),
            palette: ColorPalette::gruvbox_dark(),
        }
    }

    /// Create a Gruvbox light theme
    pub fn gruvbox_light() -> Self {
        Self {
            name: "Gruvbox Light".to_string(),
            description: "Retro groove light theme with warm, earthy colors".to_string(),
            palette: ColorPalette::gruvbox_light(),
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::GruvboxDark => Self::gruvbox_dark(),
            ThemeName::GruvboxLight => Self::gruvbox_light(),
        }
    }

    pub fn base(&self) -> Style {
        Style::default()
            .fg(self.palette.text_primary)
            .bg(self.palette.background)
    }

    pub fn border(&self, focused: bool) -> Style {
        let color = if focused {
            self.palette.border_focused
        } else {
            self.palette.border
        };
        Style::default().fg(color)
    }

    pub fn quote_text(&self) -> Style {
        Style::default()
            .fg(self.palette.text_primary)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn author(&self) -> Style {
        Style::default().fg(self.palette.accent)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.palette.error)
            .add_modifier(Modifier::BOLD)
    }

    /// Toast style while fully shown, or dimmed during fade phases
    pub fn toast(&self, dimmed: bool) -> Style {
        let fg: Color = if dimmed {
            self.palette.text_muted
        } else {
            self.palette.text_primary
        };
        Style::default().fg(fg).bg(self.palette.overlay)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::gruvbox_dark()
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        Self::from_name(name)
    }
}
