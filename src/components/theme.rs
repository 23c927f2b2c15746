//! Light palette shared by the components

use ratatui::style::Color;

pub const APP_BG: Color = Color::Rgb(255, 255, 255);
pub const HEADER_BG: Color = Color::Rgb(227, 242, 253);
pub const SIDEBAR_BG: Color = Color::Rgb(250, 250, 250);
pub const CARD_BG: Color = Color::Rgb(255, 255, 255);
pub const CARD_BORDER: Color = Color::Rgb(189, 189, 189);
pub const DIVIDER: Color = Color::Rgb(224, 224, 224);
pub const TEXT_MAIN: Color = Color::Rgb(33, 33, 33);
pub const TEXT_DIM: Color = Color::Rgb(117, 117, 117);
pub const ACCENT_BLUE: Color = Color::Rgb(25, 118, 210);
pub const HIGHLIGHT_BG: Color = Color::Rgb(187, 222, 251);
