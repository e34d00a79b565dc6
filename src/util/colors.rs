use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x002dd4bf);
pub const SECONDARY: Color = Color::from_u32(0x000d9488);
pub const NEUTRAL: Color = Color::from_u32(0x006b7280);
pub const TEXT: Color = Color::from_u32(0x00e5e7eb);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const SURFACE: Color = Color::from_u32(0x001f2937);
pub const ACCENT: Color = Color::from_u32(0x00fb923c);
