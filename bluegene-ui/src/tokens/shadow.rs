// Shadow token system.

// Shadow colors
pub const SHADOW_COLOR_NEUTRAL: &str = "oklch(70% 0.05 255 / 0.22)";
pub const SHADOW_COLOR_PRIMARY: &str = "oklch(55% 0.16 230 / 0.33)";

// Black shadows for subtle elevation
pub const SHADOW_COLOR_BLACK_SUBTLE: &str = "rgba(0, 0, 0, 0.04)";
pub const SHADOW_COLOR_BLACK_LIGHT: &str = "rgba(0, 0, 0, 0.08)";
pub const SHADOW_COLOR_BLACK_MEDIUM: &str = "rgba(0, 0, 0, 0.15)";
