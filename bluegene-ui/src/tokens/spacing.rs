// Spacing token system.

/// 0px spacing
pub const SPACING_0: u32 = 0;

/// 2px spacing
pub const SPACING_2: u32 = 2;

/// 4px spacing
pub const SPACING_4: u32 = 4;

/// 6px spacing
pub const SPACING_6: u32 = 6;

/// 8px spacing
pub const SPACING_8: u32 = 8;
pub const SPACING_10: u32 = 10;

/// 12px spacing
pub const SPACING_12: u32 = 12;

/// 16px spacing
pub const SPACING_16: u32 = 16;

/// 20px spacing
pub const SPACING_20: u32 = 20;

/// 24px spacing
pub const SPACING_24: u32 = 24;

/// 32px spacing
pub const SPACING_32: u32 = 32;

/// 40px spacing
pub const SPACING_40: u32 = 40;

/// 48px spacing
pub const SPACING_48: u32 = 48;

/// 64px spacing
pub const SPACING_64: u32 = 64;

/// 96px spacing
pub const SPACING_96: u32 = 96;
