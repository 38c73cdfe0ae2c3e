//! About section: intro card and the mission / what-we-do / why-us panel.

use crate::content::site;
use crate::section::{section, section_heading};
use bluegene_ui::*;
use shared::AboutItem;
use zoon::*;

pub fn about() -> impl Element {
    let content = site();

    section(
        "about",
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_32))
            .item(section_heading("About Us", Some(content.about_intro.as_str())))
            .item(
                card()
                    .variant(CardVariant::Elevated)
                    .size(CardSize::Large)
                    .child(
                        Row::new()
                            .multiline()
                            .s(Width::fill())
                            .s(Gap::new().x(SPACING_32).y(SPACING_24))
                            .items(
                                content
                                    .about_items
                                    .iter()
                                    .map(|item| about_panel_item(item).unify()),
                            ),
                    )
                    .build(),
            ),
    )
}

fn about_panel_item(item: &AboutItem) -> impl Element {
    Row::new()
        .s(Width::fill().min(280))
        .s(Gap::new().x(SPACING_12))
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_24))
                .child(Text::new(&item.icon)),
        )
        .item(
            Column::new()
                .s(Gap::new().y(SPACING_4))
                .item(h4(&item.title))
                .item(paragraph(&item.text)),
        )
}
