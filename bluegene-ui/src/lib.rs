//! # BlueGene UI
//!
//! Design tokens and components for the BlueGene marketing site:
//! light/dark theming, an oklch color system, typography helpers, and the
//! navigation building blocks (recursive menu renderer + dropdown).

pub mod components;
pub mod tokens;

pub use components::*;
pub use tokens::*;
