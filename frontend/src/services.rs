//! Healthcare services grid.

use crate::content::site;
use crate::section::{section, section_heading};
use bluegene_ui::*;
use shared::ServiceCard;
use zoon::*;

pub fn services() -> impl Element {
    section(
        "services",
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_32))
            .item(section_heading("Healthcare Services", None))
            .item(card_grid(&site().services)),
    )
}

/// Anchored card grid shared with the technology section: same record
/// shape, same template.
pub fn card_grid(cards: &[ServiceCard]) -> impl Element {
    Row::new()
        .multiline()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_24).y(SPACING_24))
        .s(Align::new().left().top())
        .items(cards.iter().map(|entry| service_card(entry).unify()))
}

fn service_card(entry: &ServiceCard) -> impl Element {
    let id = entry.id.clone();

    El::new()
        .s(Width::exact(380))
        .update_raw_el(move |raw_el| raw_el.attr("id", &id))
        .child(
            card()
                .variant(CardVariant::Elevated)
                .child(
                    Column::new()
                        .s(Gap::new().y(SPACING_12))
                        .item(
                            El::new()
                                .s(Width::exact(40))
                                .s(Height::exact(40))
                                .s(RoundedCorners::all(CORNER_RADIUS_MAX))
                                .s(Background::new().color_signal(primary_3())),
                        )
                        .item(h3(&entry.title))
                        .item(paragraph(&entry.blurb)),
                )
                .build(),
        )
}
