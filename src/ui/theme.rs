use ratatui::style::Color;

use crate::catalog::Rgb;

pub const CREMA: Color = Color::Rgb(0xa7, 0x7b, 0x50);
pub const AMBER: Color = Color::Rgb(0xd9, 0x77, 0x06);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x44, 0x40, 0x3c);
pub const HEADER_TEXT: Color = Color::Rgb(0xe7, 0xe5, 0xe4);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x78, 0x71, 0x6c);
pub const MUTED_TEXT: Color = Color::Rgb(0xa8, 0xa2, 0x9e);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x29, 0x25, 0x24);
pub const CUP_GLASS: Color = Color::Rgb(0x8a, 0x84, 0x7f);
pub const STEAM: Color = Color::Rgb(0xd6, 0xd3, 0xd1);

/// Terminal colour of a recipe layer.
pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
