// Design token system for the BlueGene site.

pub mod animation;
pub mod border;
pub mod color;
pub mod corner_radius;
pub mod shadow;
pub mod spacing;
pub mod theme;
pub mod typography;

pub use animation::*;
pub use border::*;
pub use color::*;
pub use corner_radius::*;
pub use shadow::*;
pub use spacing::*;
pub use theme::*;
pub use typography::*;
