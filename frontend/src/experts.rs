//! Expert profiles: doctors and the lab & quality team, one card
//! template for both grids.

use crate::content::site;
use crate::section::{section, section_heading};
use bluegene_ui::*;
use shared::Profile;
use zoon::*;

pub fn doctors() -> impl Element {
    section(
        "doctors",
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_32))
            .item(section_heading("Doctors", None))
            .item(profile_grid(&site().doctors)),
    )
}

pub fn lab_team() -> impl Element {
    section(
        "labquality",
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_32))
            .item(section_heading("Lab & Quality Team", None))
            .item(profile_grid(&site().lab_team)),
    )
}

fn profile_grid(profiles: &[Profile]) -> impl Element {
    Row::new()
        .multiline()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_24).y(SPACING_24))
        .s(Align::new().left().top())
        .items(profiles.iter().map(|profile| profile_card(profile).unify()))
}

fn profile_card(profile: &Profile) -> impl Element {
    El::new().s(Width::exact(380)).child(
        card()
            .child(
                Row::new()
                    .s(Gap::new().x(SPACING_16))
                    .s(Align::new().center_y())
                    .item(
                        El::new()
                            .s(Width::exact(64))
                            .s(Height::exact(64))
                            .s(RoundedCorners::all(CORNER_RADIUS_MAX))
                            .s(Background::new().color_signal(neutral_3()))
                            .child(El::new().s(Align::center()).child(muted("Photo"))),
                    )
                    .item(
                        Column::new()
                            .s(Gap::new().y(SPACING_2))
                            .item(h4(&profile.name))
                            .item(small(&profile.role)),
                    ),
            )
            .build(),
    )
}
