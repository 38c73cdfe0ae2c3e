// Corner radius token system.

pub const CORNER_RADIUS_0: u32 = 0; // No rounding
pub const CORNER_RADIUS_4: u32 = 4; // Chips, menu rows
pub const CORNER_RADIUS_6: u32 = 6; // Buttons
pub const CORNER_RADIUS_8: u32 = 8; // Cards
pub const CORNER_RADIUS_12: u32 = 12; // CTA buttons, dropdown panels
pub const CORNER_RADIUS_16: u32 = 16; // Large containers (cards, hero panel)
pub const CORNER_RADIUS_24: u32 = 24; // Hero illustration panel
pub const CORNER_RADIUS_MAX: u32 = 9999; // Full (circle/pill)
