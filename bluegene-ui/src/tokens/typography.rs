// Typography token system.

// Font Families
pub const FONT_FAMILY_SANS: &str = "'Inter', 'system-ui', 'Segoe UI', 'Arial', sans-serif";

// Font Sizes
pub const FONT_SIZE_12: u32 = 12;
pub const FONT_SIZE_14: u32 = 14;
pub const FONT_SIZE_16: u32 = 16;
pub const FONT_SIZE_18: u32 = 18;
pub const FONT_SIZE_20: u32 = 20;
pub const FONT_SIZE_24: u32 = 24;
pub const FONT_SIZE_30: u32 = 30;
pub const FONT_SIZE_36: u32 = 36;
pub const FONT_SIZE_48: u32 = 48;

// Font Weights
pub const FONT_WEIGHT_4: u32 = 400; // Normal
pub const FONT_WEIGHT_5: u32 = 500; // Medium
pub const FONT_WEIGHT_6: u32 = 600; // Semibold
pub const FONT_WEIGHT_7: u32 = 700; // Bold
pub const FONT_WEIGHT_8: u32 = 800; // Extrabold (hero headline)
