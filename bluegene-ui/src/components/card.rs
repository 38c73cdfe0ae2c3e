// Card component.
// Container for service cards, profile cards and panel blocks.

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardVariant {
    Default,  // Border, page background
    Elevated, // Border + soft shadow
    Filled,   // Tinted background
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardSize {
    Small,
    Medium,
    Large,
}

pub struct CardBuilder {
    variant: CardVariant,
    size: CardSize,
    child: Option<RawElOrText>,
}

impl CardBuilder {
    pub fn new() -> Self {
        Self {
            variant: CardVariant::Default,
            size: CardSize::Medium,
            child: None,
        }
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    pub fn child(mut self, child: impl Element) -> Self {
        self.child = Some(child.unify());
        self
    }

    pub fn build(self) -> impl Element {
        let padding = match self.size {
            CardSize::Small => SPACING_12,
            CardSize::Medium => SPACING_20,
            CardSize::Large => SPACING_24,
        };

        let variant = self.variant;

        let background_signal = theme().map(move |t| match (variant, t) {
            (CardVariant::Filled, Theme::Light) => "oklch(97% 0.01 255)",
            (CardVariant::Filled, Theme::Dark) => "oklch(18% 0.02 255)",
            (_, Theme::Light) => "oklch(100% 0 0)",
            (_, Theme::Dark) => "oklch(15% 0.015 255)",
        });

        let mut card = El::new()
            .s(Width::fill())
            .s(Padding::all(padding))
            .s(RoundedCorners::all(CORNER_RADIUS_16))
            .s(Background::new().color_signal(background_signal))
            .s(Borders::all_signal(
                neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
            ))
            .s(transition_colors());

        if matches!(variant, CardVariant::Elevated) {
            card = card.s(Shadows::new([Shadow::new()
                .y(4)
                .blur(16)
                .color(SHADOW_COLOR_BLACK_LIGHT)]));
        }

        match self.child {
            Some(child) => card.child(child).unify(),
            None => card.unify(),
        }
    }
}

// Convenience function
pub fn card() -> CardBuilder {
    CardBuilder::new()
}
