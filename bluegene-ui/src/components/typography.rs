// Typography components.

use crate::tokens::*;
use zoon::*;

pub fn h1(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_48)
            .weight(FontWeight::Number(FONT_WEIGHT_8)))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn h2(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_30)
            .weight(FontWeight::Number(FONT_WEIGHT_6)))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn h3(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_18)
            .weight(FontWeight::Number(FONT_WEIGHT_6)))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn h4(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_16)
            .weight(FontWeight::Number(FONT_WEIGHT_6)))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn paragraph(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_16))
        .s(Font::new().color_signal(neutral_9()))
        .child(Text::new(text.into()))
}

/// Larger paragraph for hero/intro copy.
pub fn lead(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_18))
        .s(Font::new().color_signal(neutral_9()))
        .child(Text::new(text.into()))
}

pub fn small(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_14))
        .s(Font::new().color_signal(neutral_8()))
        .child(Text::new(text.into()))
}

pub fn muted(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_14))
        .s(Font::new().color_signal(neutral_7()))
        .child(Text::new(text.into()))
}
