// Button component.

use crate::components::icon::{IconBuilder, IconColor, IconName, IconSize};
use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

pub struct ButtonBuilder {
    label: Option<String>,
    variant: ButtonVariant,
    size: ButtonSize,
    left_icon: Option<IconName>,
    icon_signal: Option<Box<dyn Signal<Item = IconName> + Unpin>>,
    on_press: Option<Box<dyn Fn()>>,
}

impl ButtonBuilder {
    pub fn new() -> Self {
        Self {
            label: None,
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            left_icon: None,
            icon_signal: None,
            on_press: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn left_icon(mut self, icon: IconName) -> Self {
        self.left_icon = Some(icon);
        self.icon_signal = None;
        self
    }

    /// Icon chosen reactively (theme toggles, chevrons).
    pub fn icon_signal<S>(mut self, icon_signal: S) -> Self
    where
        S: Signal<Item = IconName> + Unpin + 'static,
    {
        self.icon_signal = Some(Box::new(icon_signal));
        self.left_icon = None;
        self
    }

    pub fn on_press<F>(mut self, on_press: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_press = Some(Box::new(on_press));
        self
    }

    pub fn build(self) -> impl Element {
        let (padding_x, padding_y, font_size, icon_size) = match self.size {
            ButtonSize::Small => (SPACING_8, SPACING_4, FONT_SIZE_14, IconSize::Small),
            ButtonSize::Medium => (SPACING_12, SPACING_8, FONT_SIZE_14, IconSize::Small),
            ButtonSize::Large => (SPACING_20, SPACING_12, FONT_SIZE_16, IconSize::Medium),
        };

        let variant = self.variant;
        let (hovered, hovered_signal) = Mutable::new_and_signal(false);

        let background_signal = map_ref! {
            let theme = theme(),
            let hovered = hovered_signal => {
                match (variant, *theme, *hovered) {
                    (ButtonVariant::Primary, Theme::Light, false) => "oklch(55% 0.16 230)",
                    (ButtonVariant::Primary, Theme::Light, true) => "oklch(45% 0.16 230)",
                    (ButtonVariant::Primary, Theme::Dark, false) => "oklch(55% 0.13 230)",
                    (ButtonVariant::Primary, Theme::Dark, true) => "oklch(65% 0.16 230)",
                    (ButtonVariant::Outline, Theme::Light, false) => "oklch(100% 0 0)",
                    (ButtonVariant::Outline, Theme::Light, true) => "oklch(97% 0.01 255)",
                    (ButtonVariant::Outline, Theme::Dark, false) => "oklch(15% 0.015 255)",
                    (ButtonVariant::Outline, Theme::Dark, true) => "oklch(20% 0.02 255)",
                    (ButtonVariant::Ghost, _, false) => "transparent",
                    (ButtonVariant::Ghost, Theme::Light, true) => "oklch(94% 0.015 255)",
                    (ButtonVariant::Ghost, Theme::Dark, true) => "oklch(20% 0.02 255)",
                }
            }
        };

        let font_color_signal = theme().map(move |t| match (variant, t) {
            (ButtonVariant::Primary, _) => "oklch(99% 0.005 255)",
            (ButtonVariant::Outline | ButtonVariant::Ghost, Theme::Light) => {
                "oklch(30% 0.03 255)"
            }
            (ButtonVariant::Outline | ButtonVariant::Ghost, Theme::Dark) => "oklch(92% 0.02 255)",
        });

        let mut label_items: Vec<RawElOrText> = Vec::new();

        if let Some(icon_signal) = self.icon_signal {
            label_items.push(
                El::new()
                    .child_signal(icon_signal.map(move |name| {
                        IconBuilder::new(name)
                            .size(icon_size)
                            .color(IconColor::Current)
                            .build()
                    }))
                    .unify(),
            );
        } else if let Some(name) = self.left_icon {
            label_items.push(
                IconBuilder::new(name)
                    .size(icon_size)
                    .color(IconColor::Current)
                    .build()
                    .unify(),
            );
        }

        if let Some(label) = self.label {
            label_items.push(
                El::new()
                    .s(Font::new()
                        .size(font_size)
                        .weight(FontWeight::Number(FONT_WEIGHT_5)))
                    .child(Text::new(label))
                    .unify(),
            );
        }

        let on_press = self.on_press.unwrap_or_else(|| Box::new(|| {}));

        Button::new()
            .s(Padding::new().x(padding_x).y(padding_y))
            .s(RoundedCorners::all(CORNER_RADIUS_6))
            .s(Background::new().color_signal(background_signal))
            .s(Font::new().color_signal(font_color_signal))
            .s(Cursor::new(CursorIcon::Pointer))
            .s(transition_colors())
            .s(match variant {
                ButtonVariant::Outline => Borders::all_signal(
                    neutral_5().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
                ),
                ButtonVariant::Primary | ButtonVariant::Ghost => Borders::new(),
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .label(
                Row::new()
                    .s(Gap::new().x(SPACING_6))
                    .s(Align::center())
                    .items(label_items),
            )
            .on_press(move || on_press())
    }
}

// Convenience function
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder::new().label(label)
}
