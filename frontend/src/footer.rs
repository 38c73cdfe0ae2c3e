//! Footer with helpline and copyright.

use crate::content::site;
use crate::section::CONTENT_MAX_WIDTH;
use bluegene_ui::tokens::*;
use zoon::*;

const FOOTER_LOGO_URL: &str = "/_api/public/assets/footer-logo.png";

pub fn footer() -> impl Element {
    let content = site();

    El::new()
        .s(Width::fill())
        .s(Background::new().color("oklch(18% 0.03 255)"))
        .child(
            Row::new()
                .multiline()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .s(Padding::new().x(SPACING_24).y(SPACING_40))
                .s(Gap::new().x(SPACING_32).y(SPACING_24))
                .item(
                    Image::new()
                        .s(Height::exact(40))
                        .s(Align::new().center_y())
                        .url(FOOTER_LOGO_URL)
                        .description("BlueGene logo"),
                )
                .item(El::new().s(Width::fill()))
                .item(
                    Column::new()
                        .s(Gap::new().y(SPACING_4))
                        .s(Align::new().right())
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_14)
                                    .weight(FontWeight::Number(FONT_WEIGHT_5))
                                    .color("oklch(75% 0.035 255)"))
                                .child(Text::new("Helpline")),
                        )
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_24)
                                    .weight(FontWeight::Number(FONT_WEIGHT_7))
                                    .color("oklch(97% 0.01 255)"))
                                .child(Text::new(&content.helpline)),
                        )
                        .item(
                            El::new()
                                .s(Font::new().size(FONT_SIZE_12).color("oklch(65% 0.035 255)"))
                                .child(Text::new(format!(
                                    "© {} {} Solutions | Privacy Policy | Terms",
                                    current_year(),
                                    content.brand,
                                ))),
                        ),
                ),
        )
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
