// Icon component.
// Inline Lucide SVGs compiled in with include_str!; stroke inherits
// currentColor so the wrapping element controls the tint.

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconName {
    ChevronDown,
    ChevronUp,
    ChevronRight,
    Sun,
    Moon,
    MapPin,
    Phone,
    Clock,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconSize {
    Small,  // 16px
    Medium, // 20px
    Large,  // 24px
}

impl IconSize {
    pub fn to_px(self) -> u32 {
        match self {
            IconSize::Small => 16,
            IconSize::Medium => 20,
            IconSize::Large => 24,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconColor {
    Current, // Inherit from parent
    Primary,
    Secondary,
    Muted,
    Custom(&'static str),
}

pub struct IconBuilder {
    name: IconName,
    size: IconSize,
    color: IconColor,
}

impl IconBuilder {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: IconSize::Medium,
            color: IconColor::Secondary,
        }
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: IconColor) -> Self {
        self.color = color;
        self
    }

    pub fn build(self) -> impl Element {
        let size_px = self.size.to_px();
        let name = self.name;

        let color = self.color;
        let color_signal = theme().map(move |t| match (color, t) {
            (IconColor::Current, _) => "currentColor",
            (IconColor::Primary, Theme::Light) => "oklch(55% 0.16 230)",
            (IconColor::Primary, Theme::Dark) => "oklch(75% 0.16 230)",
            (IconColor::Secondary, Theme::Light) => "oklch(45% 0.035 255)",
            (IconColor::Secondary, Theme::Dark) => "oklch(75% 0.035 255)",
            (IconColor::Muted, Theme::Light) => "oklch(60% 0.02 255)",
            (IconColor::Muted, Theme::Dark) => "oklch(65% 0.02 255)",
            (IconColor::Custom(color), _) => color,
        });

        El::new()
            .s(Width::exact(size_px))
            .s(Height::exact(size_px))
            .s(Align::center())
            .child_signal(color_signal.map(move |color| {
                RawHtmlEl::new("div")
                    .style("color", color)
                    .inner_markup(&svg_markup(name, size_px))
                    .into_element()
            }))
    }
}

fn svg_markup(name: IconName, size_px: u32) -> String {
    let svg_template = match name {
        IconName::ChevronDown => include_str!("../../assets/icons/chevron-down.svg"),
        IconName::ChevronUp => include_str!("../../assets/icons/chevron-up.svg"),
        IconName::ChevronRight => include_str!("../../assets/icons/chevron-right.svg"),
        IconName::Sun => include_str!("../../assets/icons/sun.svg"),
        IconName::Moon => include_str!("../../assets/icons/moon.svg"),
        IconName::MapPin => include_str!("../../assets/icons/map-pin.svg"),
        IconName::Phone => include_str!("../../assets/icons/phone.svg"),
        IconName::Clock => include_str!("../../assets/icons/clock.svg"),
    };

    // Lucide sources are 24x24; rewrite to the requested box.
    svg_template
        .replace("width=\"24\"", &format!("width=\"{size_px}\""))
        .replace("height=\"24\"", &format!("height=\"{size_px}\""))
}

// Convenience functions
pub fn icon(name: IconName) -> IconBuilder {
    IconBuilder::new(name)
}

pub fn chevron_down() -> IconBuilder {
    IconBuilder::new(IconName::ChevronDown)
}

pub fn chevron_up() -> IconBuilder {
    IconBuilder::new(IconName::ChevronUp)
}

pub fn chevron_right() -> IconBuilder {
    IconBuilder::new(IconName::ChevronRight)
}

pub fn sun() -> IconBuilder {
    IconBuilder::new(IconName::Sun)
}

pub fn moon() -> IconBuilder {
    IconBuilder::new(IconName::Moon)
}
