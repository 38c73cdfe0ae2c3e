//! Technology solutions grid.

use crate::content::site;
use crate::section::{section, section_heading};
use crate::services::card_grid;
use bluegene_ui::*;
use zoon::*;

pub fn technology() -> impl Element {
    section(
        "tech",
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_32))
            .item(section_heading("Technology Solutions", None))
            .item(card_grid(&site().technology)),
    )
}
