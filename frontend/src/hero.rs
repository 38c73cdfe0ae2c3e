//! Hero banner: headline, tagline, CTAs and the illustration placeholder.

use crate::content::site;
use crate::section::section;
use bluegene_ui::*;
use shared::CallToAction;
use zoon::*;

pub fn hero() -> impl Element {
    let hero = &site().hero;

    section(
        "home",
        Row::new()
            .multiline()
            .s(Width::fill())
            .s(Gap::new().x(SPACING_40).y(SPACING_32))
            .s(Align::new().center_y())
            .item(
                Column::new()
                    .s(Width::fill().min(320))
                    .s(Gap::new().y(SPACING_24))
                    .item(h1(&hero.headline))
                    .item(lead(&hero.tagline))
                    .item(
                        Row::new()
                            .multiline()
                            .s(Gap::new().x(SPACING_12).y(SPACING_12))
                            .item(cta_link(&hero.primary_cta, true))
                            .item(cta_link(&hero.secondary_cta, false)),
                    ),
            )
            .item(illustration_placeholder()),
    )
}

fn cta_link(cta: &CallToAction, primary: bool) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);

    let background_signal = map_ref! {
        let theme = theme(),
        let hovered = hovered_signal => {
            match (primary, *theme, *hovered) {
                (true, Theme::Light, false) => "oklch(55% 0.16 230)",
                (true, Theme::Light, true) => "oklch(45% 0.16 230)",
                (true, Theme::Dark, false) => "oklch(55% 0.13 230)",
                (true, Theme::Dark, true) => "oklch(65% 0.16 230)",
                (false, Theme::Light, _) => "oklch(100% 0 0)",
                (false, Theme::Dark, _) => "oklch(15% 0.015 255)",
            }
        }
    };

    Link::new()
        .s(Padding::new().x(SPACING_20).y(SPACING_12))
        .s(RoundedCorners::all(CORNER_RADIUS_12))
        .s(Background::new().color_signal(background_signal))
        .s(Font::new()
            .size(FONT_SIZE_16)
            .weight(FontWeight::Number(FONT_WEIGHT_5))
            .color_signal(theme().map(move |t| match (primary, t) {
                (true, _) => "oklch(99% 0.005 255)",
                (false, Theme::Light) => "oklch(30% 0.03 255)",
                (false, Theme::Dark) => "oklch(92% 0.02 255)",
            })))
        .s(Shadows::new(if primary {
            vec![Shadow::new().y(2).blur(8).color(SHADOW_COLOR_PRIMARY)]
        } else {
            Vec::new()
        }))
        .s(if primary {
            Borders::new()
        } else {
            Borders::all_signal(
                neutral_5().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
            )
        })
        .s(transition_colors())
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(Text::new(&cta.label))
        .to(cta.href.clone())
}

fn illustration_placeholder() -> impl Element {
    El::new()
        .s(Width::fill().min(320))
        .s(Height::exact(360))
        .s(RoundedCorners::all(CORNER_RADIUS_24))
        .s(Background::new().color_signal(neutral_1()))
        .s(Borders::all_signal(
            neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
        ))
        .child(
            Column::new()
                .s(Align::center())
                .s(Gap::new().y(SPACING_4))
                .item(small("Image / Illustration"))
                .item(muted("(Replace with clinic/lab photo)")),
        )
}
