use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const TABLE_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ROW_ALT_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
