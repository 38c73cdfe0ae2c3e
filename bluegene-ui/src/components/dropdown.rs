// Dropdown component.
// A top-level navigation trigger that opens an overlay panel hosting the
// recursive menu list. Each dropdown owns its open flag; sibling
// dropdowns don't interact.

use crate::components::icon::{IconBuilder, IconName, IconSize};
use crate::components::menu::{MenuItem, menu_list};
use crate::tokens::*;
use indexmap::IndexSet;
use zoon::*;

pub struct DropdownBuilder {
    label: String,
    items: Vec<MenuItem>,
    panel_width: u32,
}

impl DropdownBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
            panel_width: 320,
        }
    }

    pub fn items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }

    pub fn panel_width(mut self, width: u32) -> Self {
        self.panel_width = width;
        self
    }

    pub fn build(self) -> impl Element {
        let is_open = Mutable::new(false);
        // Lives outside the panel so submenu state survives close/reopen.
        let expanded = Mutable::new(IndexSet::<String>::new());

        let label = self.label;
        let items = self.items;
        let panel_width = self.panel_width;

        let (hovered, hovered_signal) = Mutable::new_and_signal(false);

        let trigger = Row::new()
            .s(Padding::new().x(SPACING_12).y(SPACING_8))
            .s(Gap::new().x(SPACING_4))
            .s(Align::new().center_y())
            .s(RoundedCorners::all(CORNER_RADIUS_6))
            .s(Cursor::new(CursorIcon::Pointer))
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
            .item(Text::new(&label))
            .item(El::new().child_signal(is_open.signal().dedupe().map(|open| {
                IconBuilder::new(if open {
                    IconName::ChevronUp
                } else {
                    IconName::ChevronDown
                })
                .size(IconSize::Small)
                .build()
            })))
            .on_click({
                let is_open = is_open.clone();
                move || is_open.set_neq(!is_open.get())
            });

        trigger
            .element_below_signal(is_open.signal().map_true(move || {
                El::new()
                    .s(Width::exact(panel_width))
                    .s(Transform::new().move_down(4))
                    .s(Padding::all(SPACING_8))
                    .s(RoundedCorners::all(CORNER_RADIUS_12))
                    .s(Background::new().color_signal(theme().map(|t| match t {
                        Theme::Light => "oklch(100% 0 0)",
                        Theme::Dark => "oklch(15% 0.015 255)",
                    })))
                    .s(Borders::all_signal(neutral_4().map(|color| {
                        Border::new().width(BORDER_WIDTH_1).color(color)
                    })))
                    .s(Shadows::new([
                        Shadow::new()
                            .y(4)
                            .blur(6)
                            .spread(-1)
                            .color(SHADOW_COLOR_NEUTRAL),
                        Shadow::new()
                            .y(2)
                            .blur(4)
                            .spread(-2)
                            .color(SHADOW_COLOR_NEUTRAL),
                    ]))
                    .child(
                        menu_list()
                            .items(items.clone())
                            .external_expanded(expanded.clone())
                            .build(),
                    )
            }))
            .on_click_outside({
                let is_open = is_open.clone();
                move || is_open.set(false)
            })
    }
}

// Convenience function
pub fn dropdown(label: impl Into<String>) -> DropdownBuilder {
    DropdownBuilder::new(label)
}
