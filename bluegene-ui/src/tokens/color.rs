// Color token system.
// Reactive oklch scales keyed off the theme signal. Primary sits on the
// sky-blue brand hue (230), neutrals on a cool slate hue (255).

use super::theme::{Theme, theme};
use zoon::*;

// Primary color scale
pub fn primary_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(98% 0.01 230)",
        Theme::Dark => "oklch(20% 0.01 230)",
    })
}

pub fn primary_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(95% 0.03 230)",
        Theme::Dark => "oklch(25% 0.03 230)",
    })
}

pub fn primary_3() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(90% 0.05 230)",
        Theme::Dark => "oklch(30% 0.05 230)",
    })
}

pub fn primary_4() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(85% 0.07 230)",
        Theme::Dark => "oklch(35% 0.07 230)",
    })
}

pub fn primary_5() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(75% 0.10 230)",
        Theme::Dark => "oklch(45% 0.10 230)",
    })
}

pub fn primary_6() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(65% 0.13 230)",
        Theme::Dark => "oklch(55% 0.13 230)",
    })
}

pub fn primary_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(55% 0.16 230)",
        Theme::Dark => "oklch(65% 0.16 230)",
    })
}

pub fn primary_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(45% 0.16 230)",
        Theme::Dark => "oklch(75% 0.16 230)",
    })
}

pub fn primary_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(35% 0.14 230)",
        Theme::Dark => "oklch(85% 0.14 230)",
    })
}

// Neutral color scale
pub fn neutral_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(99% 0.005 255)",
        Theme::Dark => "oklch(12% 0.01 255)",
    })
}

pub fn neutral_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(97% 0.01 255)",
        Theme::Dark => "oklch(15% 0.015 255)",
    })
}

pub fn neutral_3() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(94% 0.015 255)",
        Theme::Dark => "oklch(20% 0.02 255)",
    })
}

pub fn neutral_4() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(90% 0.02 255)",
        Theme::Dark => "oklch(25% 0.02 255)",
    })
}

pub fn neutral_5() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(80% 0.03 255)",
        Theme::Dark => "oklch(35% 0.03 255)",
    })
}

pub fn neutral_6() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(70% 0.03 255)",
        Theme::Dark => "oklch(45% 0.03 255)",
    })
}

pub fn neutral_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(60% 0.035 255)",
        Theme::Dark => "oklch(55% 0.035 255)",
    })
}

pub fn neutral_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(50% 0.035 255)",
        Theme::Dark => "oklch(65% 0.035 255)",
    })
}

pub fn neutral_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(40% 0.035 255)",
        Theme::Dark => "oklch(75% 0.035 255)",
    })
}

pub fn neutral_10() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(30% 0.03 255)",
        Theme::Dark => "oklch(85% 0.03 255)",
    })
}

pub fn neutral_11() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(22% 0.025 255)",
        Theme::Dark => "oklch(92% 0.02 255)",
    })
}

pub fn neutral_12() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(15% 0.02 255)",
        Theme::Dark => "oklch(97% 0.01 255)",
    })
}
