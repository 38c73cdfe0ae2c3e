//! Shared section scaffolding: every page section is an anchored wrapper
//! around a centered, width-capped content column.

use bluegene_ui::tokens::*;
use bluegene_ui::{h2, lead};
use zoon::*;

pub const CONTENT_MAX_WIDTH: u32 = 1280;

pub fn section(id: &'static str, content: impl Element) -> impl Element {
    El::new()
        .s(Width::fill())
        .update_raw_el(|raw_el| raw_el.attr("id", id))
        .child(
            El::new()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .s(Padding::new().x(SPACING_24).y(SPACING_48))
                .child(content),
        )
}

/// Section heading card, optionally with intro copy beneath the title.
pub fn section_heading(title: impl Into<String>, intro: Option<&str>) -> impl Element {
    let mut items: Vec<RawElOrText> = vec![h2(title).unify()];
    if let Some(intro) = intro {
        items.push(lead(intro).unify());
    }

    El::new().s(Align::new().left()).child(
        Column::new()
            .s(Gap::new().y(SPACING_8))
            .s(Padding::new().x(SPACING_20).y(SPACING_16))
            .s(RoundedCorners::all(CORNER_RADIUS_12))
            .s(Background::new().color_signal(primary_2()))
            .s(Borders::all_signal(
                primary_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
            ))
            .items(items),
    )
}
