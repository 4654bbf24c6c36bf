use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_WARN: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
