// Component library for the BlueGene site.

pub mod button;
pub mod card;
pub mod dropdown;
pub mod icon;
pub mod menu;
pub mod typography;

// Re-export components for easy access
pub use button::*;
pub use card::*;
pub use dropdown::*;
pub use icon::*;
pub use menu::*;
pub use typography::*;
