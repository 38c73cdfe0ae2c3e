//! Page root: scrollable column of sections under the sticky header.

use crate::{about, contact, experts, footer, header, hero, services, technology};
use bluegene_ui::tokens::*;
use zoon::*;

pub fn root() -> impl Element {
    El::new()
        .s(Height::screen())
        .s(Width::fill())
        .s(Background::new().color_signal(neutral_2()))
        .s(Font::new().family([
            FontFamily::new("Inter"),
            FontFamily::new("system-ui"),
            FontFamily::new("Segoe UI"),
            FontFamily::new("Arial"),
            FontFamily::SansSerif,
        ]))
        .s(Scrollbars::both())
        .update_raw_el(|raw_el| raw_el.style("scroll-behavior", "smooth"))
        .child(
            Column::new()
                .s(Width::fill())
                .item(header::header())
                .item(hero::hero())
                .item(about::about())
                .item(services::services())
                .item(technology::technology())
                .item(experts::doctors())
                .item(experts::lab_team())
                .item(contact::contact())
                .item(footer::footer()),
        )
}
