use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color palette for the quote views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    // Base colors
    pub background: Color,
    pub surface: Color,
    pub overlay: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,

    // Status colors
    pub success: Color,
    pub error: Color,
    pub info: Color,

    pub accent: Color,
}

impl ColorPalette {
    pub fn gruvbox_dark() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40), // #282828 - dark0
            surface: Color::Rgb(60, 56, 54),    // #3c3836 - dark1
            overlay: Color::Rgb(80, 73, 69),    // #504945 - dark2

            text_primary: Color::Rgb(235, 219, 178),   // #ebdbb2 - light1
            text_secondary: Color::Rgb(213, 196, 161), // #d5c4a1 - light2
            text_muted: Color::Rgb(189, 174, 147),     // #bdae93 - light3

            border: Color::Rgb(102, 92, 84),           // #665c54 - dark4
            border_focused: Color::Rgb(131, 165, 152), // #83a598 - bright_blue

            success: Color::Rgb(152, 151, 26), // #98971a - bright_green
            error: Color::Rgb(204, 36, 29),    // #cc241d - bright_red
            info: Color::Rgb(131, 165, 152),   // #83a598 - bright_blue

            accent: Color::Rgb(250, 189, 47), // #fabd2f - bright_yellow
        }
    }

    pub fn gruvbox_light() -> Self {
        Self {
            background: Color::Rgb(251, 241, 199), // #fbf1c7 - light0
            surface: Color::Rgb(242, 229, 188),    // #f2e5bc - light1
            overlay: Color::Rgb(235, 219, 178),    // #ebdbb2 - light2

            text_primary: Color::Rgb(60, 56, 54),   // #3c3836 - dark1
            text_secondary: Color::Rgb(80, 73, 69), // #504945 - dark2
            text_muted: Color::Rgb(102, 92, 84),    // #665c54 - dark4

            border: Color::Rgb(189, 174, 147),      // #bdae93 - light3
            border_focused: Color::Rgb(7, 102, 120), // #076678 - dark_blue

            success: Color::Rgb(121, 116, 14), // #79740e - dark_green
            error: Color::Rgb(157, 0, 6),      // #9d0006 - dark_red
            info: Color::Rgb(7, 102, 120),     // #076678 - dark_blue

            accent: Color::Rgb(181, 118, 20), // #b57614 - dark_yellow
        }
    }
}
