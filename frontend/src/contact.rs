//! Contact & location block.

use crate::content::site;
use crate::section::{section, section_heading};
use bluegene_ui::*;
use shared::{ContactDetail, ContactKind};
use zoon::*;

pub fn contact() -> impl Element {
    section(
        "contact",
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_32))
            .item(section_heading("Contact & Location", None))
            .item(
                El::new().s(Width::fill().max(720)).child(
                    card()
                        .variant(CardVariant::Elevated)
                        .size(CardSize::Large)
                        .child(
                            Column::new()
                                .s(Width::fill())
                                .s(Gap::new().y(SPACING_24))
                                .items(
                                    site()
                                        .contact
                                        .iter()
                                        .map(|detail| contact_item(detail).unify()),
                                ),
                        )
                        .build(),
                ),
            ),
    )
}

fn contact_item(detail: &ContactDetail) -> impl Element {
    let icon_name = match detail.kind {
        ContactKind::Location => IconName::MapPin,
        ContactKind::Phone => IconName::Phone,
        ContactKind::Hours => IconName::Clock,
    };

    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_16))
        .item(
            El::new()
                .s(Width::exact(40))
                .s(Height::exact(40))
                .s(RoundedCorners::all(CORNER_RADIUS_MAX))
                .s(Background::new().color_signal(primary_2()))
                .child(
                    El::new().s(Align::center()).child(
                        IconBuilder::new(icon_name)
                            .size(IconSize::Medium)
                            .color(IconColor::Primary)
                            .build(),
                    ),
                ),
        )
        .item(
            Column::new()
                .s(Align::new().center_y())
                .s(Gap::new().y(SPACING_2))
                .items(detail.lines.iter().map(|line| paragraph(line).unify())),
        )
}
