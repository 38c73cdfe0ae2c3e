//! Sticky header: brand logo, flat links, the three dropdown menus and
//! the theme toggle.

use crate::content::{site, to_menu_items};
use crate::section::CONTENT_MAX_WIDTH;
use bluegene_ui::*;
use zoon::*;

const LOGO_URL: &str = "/_api/public/assets/logo.png";

pub fn header() -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Background::new().color_signal(theme().map(|t| match t {
            Theme::Light => "oklch(100% 0 0 / 0.85)",
            Theme::Dark => "oklch(15% 0.015 255 / 0.85)",
        })))
        .s(Borders::new().bottom_signal(
            neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
        ))
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "sticky")
                .style("top", "0")
                .style("z-index", "40")
                .style("backdrop-filter", "blur(8px)")
        })
        .child(
            Row::new()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .s(Height::exact(64))
                .s(Padding::new().x(SPACING_24))
                .s(Gap::new().x(SPACING_2))
                .item(brand_logo())
                .item(El::new().s(Width::fill()))
                .item(nav_link("Home", "#home"))
                .item(nav_link("About Us", "#about"))
                .items(site().menus.iter().map(|menu| {
                    dropdown(&menu.label)
                        .items(to_menu_items(&menu.items))
                        .build()
                        .unify()
                }))
                .item(nav_link("Contact Us", "#contact"))
                .item(theme_toggle()),
        )
}

fn brand_logo() -> impl Element {
    Link::new()
        .s(Align::new().center_y())
        .label(
            Image::new()
                .s(Height::exact(32))
                .url(LOGO_URL)
                .description("BlueGene logo"),
        )
        .to("#home")
}

fn nav_link(label: &'static str, href: &'static str) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);

    Link::new()
        .s(Padding::new().x(SPACING_12).y(SPACING_8))
        .s(Font::new()
            .size(FONT_SIZE_14)
            .weight(FontWeight::Number(FONT_WEIGHT_5))
            .color_signal(map_ref! {
                let theme = theme(),
                let hovered = hovered_signal => {
                    match (*theme, *hovered) {
                        (Theme::Light, false) => "oklch(30% 0.03 255)",
                        (Theme::Light, true) => "oklch(55% 0.16 230)",
                        (Theme::Dark, false) => "oklch(92% 0.02 255)",
                        (Theme::Dark, true) => "oklch(75% 0.16 230)",
                    }
                }
            }))
        .s(transition_colors())
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(Text::new(label))
        .to(href)
}

fn theme_toggle() -> impl Element {
    ButtonBuilder::new()
        .variant(ButtonVariant::Ghost)
        .size(ButtonSize::Small)
        .icon_signal(theme().map(|t| match t {
            Theme::Light => IconName::Moon,
            Theme::Dark => IconName::Sun,
        }))
        .on_press(toggle_theme)
        .build()
}
