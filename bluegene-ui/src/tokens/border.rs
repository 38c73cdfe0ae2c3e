// Border token system.

// Border Widths
pub const BORDER_WIDTH_0: u32 = 0; // No border
pub const BORDER_WIDTH_1: u32 = 1; // Default border
pub const BORDER_WIDTH_2: u32 = 2; // Emphasized border
