// Menu component.
// Recursive renderer for nested navigation: links are terminal anchors,
// submenus are independently toggleable disclosures. Expansion state is a
// set of expanded node keys, where a key is the node's position path in
// the tree, so one submenu's toggle can never affect a sibling or
// ancestor.

use crate::components::icon::{IconBuilder, IconName, IconSize};
use crate::tokens::*;
use indexmap::IndexSet;
use zoon::*;

/// Indentation applied per nesting level.
pub const INDENT_PER_LEVEL: u32 = SPACING_12;

/// A single entry in a navigation tree: a terminal link or a nested
/// submenu, never both.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuItem {
    Link { label: String, href: String },
    Submenu { label: String, items: Vec<MenuItem> },
}

impl MenuItem {
    pub fn label(&self) -> &str {
        match self {
            MenuItem::Link { label, .. } => label,
            MenuItem::Submenu { label, .. } => label,
        }
    }

    pub fn is_submenu(&self) -> bool {
        matches!(self, MenuItem::Submenu { .. })
    }
}

pub fn menu_link(label: impl Into<String>, href: impl Into<String>) -> MenuItem {
    MenuItem::Link {
        label: label.into(),
        href: href.into(),
    }
}

pub fn menu_submenu(label: impl Into<String>, items: Vec<MenuItem>) -> MenuItem {
    MenuItem::Submenu {
        label: label.into(),
        items,
    }
}

/// Stable key of a node: its index path from the menu root ("1.0.2").
pub fn item_key(path: &[usize]) -> String {
    path.iter()
        .map(|index| index.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Flip one node's open state; other keys are untouched.
pub fn toggle_expanded(expanded: &Mutable<IndexSet<String>>, key: &str) {
    let mut set = expanded.lock_mut();
    if !set.shift_remove(key) {
        set.insert(key.to_string());
    }
}

pub fn is_expanded(expanded: &Mutable<IndexSet<String>>, key: &str) -> bool {
    expanded.lock_ref().contains(key)
}

/// Labels of every item, depth-first, preserving sequence order (the
/// order the renderer emits rows in).
pub fn flatten_labels(items: &[MenuItem]) -> Vec<String> {
    let mut labels = Vec::new();
    for item in items {
        labels.push(item.label().to_string());
        if let MenuItem::Submenu { items, .. } = item {
            labels.extend(flatten_labels(items));
        }
    }
    labels
}

// Menu list builder with signal-based expansion state
pub struct MenuListBuilder {
    items: Vec<MenuItem>,
    default_expanded: Vec<String>,
    external_expanded: Option<Mutable<IndexSet<String>>>,
}

impl MenuListBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            default_expanded: Vec::new(),
            external_expanded: None,
        }
    }

    pub fn items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }

    pub fn default_expanded(mut self, keys: Vec<String>) -> Self {
        self.default_expanded = keys;
        self
    }

    /// Share expansion state with the caller (keeps submenu state alive
    /// across dropdown open/close cycles).
    pub fn external_expanded(mut self, expanded: Mutable<IndexSet<String>>) -> Self {
        self.external_expanded = Some(expanded);
        self
    }

    pub fn build(self) -> impl Element {
        let expanded = self
            .external_expanded
            .unwrap_or_else(|| Mutable::new(IndexSet::from_iter(self.default_expanded)));

        Column::new().s(Width::fill()).s(Gap::new().y(SPACING_2)).items(
            self.items
                .into_iter()
                .enumerate()
                .map({
                    let expanded = expanded.clone();
                    move |(index, item)| render_menu_item(item, vec![index], 0, expanded.clone())
                })
                .collect::<Vec<_>>(),
        )
    }
}

// Render one node; submenus recurse into their children at depth + 1.
fn render_menu_item(
    item: MenuItem,
    path: Vec<usize>,
    depth: u32,
    expanded: Mutable<IndexSet<String>>,
) -> RawElOrText {
    let indent = depth * INDENT_PER_LEVEL;

    match item {
        MenuItem::Link { label, href } => {
            let (hovered, hovered_signal) = Mutable::new_and_signal(false);

            Row::new()
                .s(Width::fill())
                .item(El::new().s(Width::exact(indent)).s(Height::exact(1)))
                .item(
                    Link::new()
                        .s(Width::fill())
                        .s(Padding::new().x(SPACING_12).y(SPACING_8))
                        .s(RoundedCorners::all(CORNER_RADIUS_8))
                        .s(Background::new().color_signal(map_ref! {
                            let theme = theme(),
                            let hovered = hovered_signal => {
                                match (*theme, *hovered) {
                                    (_, false) => "transparent",
                                    (Theme::Light, true) => "oklch(97% 0.01 255)",
                                    (Theme::Dark, true) => "oklch(20% 0.02 255)",
                                }
                            }
                        }))
                        .s(Font::new()
                            .size(FONT_SIZE_14)
                            .color_signal(neutral_10()))
                        .s(transition_colors())
                        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
                        .label(Text::new(label))
                        .to(href),
                )
                .unify()
        }
        MenuItem::Submenu { label, items } => {
            let key = item_key(&path);

            let header = Button::new()
                .s(Width::fill())
                .s(Background::new().color("transparent"))
                .s(Borders::new())
                .s(Padding::new().x(SPACING_0).y(SPACING_0))
                .s(Cursor::new(CursorIcon::Pointer))
                .s(Align::new().left())
                .label(
                    Row::new()
                        .s(Width::fill())
                        .s(Align::new().center_y())
                        .item(El::new().s(Width::exact(indent)).s(Height::exact(1)))
                        .item(
                            El::new()
                                .s(Width::fill())
                                .s(Padding::new().x(SPACING_12).y(SPACING_8))
                                .s(Font::new()
                                    .size(FONT_SIZE_14)
                                    .weight(FontWeight::Number(FONT_WEIGHT_5))
                                    .color_signal(neutral_11()))
                                .child(Text::new(&label)),
                        )
                        .item(El::new().s(Padding::new().right(SPACING_8)).child_signal({
                            let key = key.clone();
                            expanded
                                .signal_ref(move |expanded_set| expanded_set.contains(&key))
                                .dedupe()
                                .map(|is_open| {
                                    IconBuilder::new(if is_open {
                                        IconName::ChevronDown
                                    } else {
                                        IconName::ChevronRight
                                    })
                                    .size(IconSize::Small)
                                    .build()
                                })
                        })),
                )
                .on_press({
                    let expanded = expanded.clone();
                    let key = key.clone();
                    move || toggle_expanded(&expanded, &key)
                });

            Column::new()
                .s(Width::fill())
                .item(header)
                .item_signal({
                    let open_signal = {
                        let key = key.clone();
                        expanded
                            .signal_ref(move |expanded_set| expanded_set.contains(&key))
                            .dedupe()
                    };
                    open_signal.map(move |is_open| {
                        is_open.then(|| {
                            Column::new()
                                .s(Width::fill())
                                .s(Gap::new().y(SPACING_2))
                                .items(
                                    items
                                        .iter()
                                        .cloned()
                                        .enumerate()
                                        .map(|(index, child)| {
                                            let mut child_path = path.clone();
                                            child_path.push(index);
                                            render_menu_item(
                                                child,
                                                child_path,
                                                depth + 1,
                                                expanded.clone(),
                                            )
                                        })
                                        .collect::<Vec<_>>(),
                                )
                        })
                    })
                })
                .unify()
        }
    }
}

// Convenience function
pub fn menu_list() -> MenuListBuilder {
    MenuListBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_items() -> Vec<MenuItem> {
        vec![
            menu_link("A", "#a"),
            menu_submenu("B", vec![menu_link("C", "#c")]),
        ]
    }

    #[test]
    fn flatten_is_a_pre_order_traversal() {
        assert_eq!(flatten_labels(&nested_items()), ["A", "B", "C"]);

        let three_levels = vec![menu_submenu(
            "outer",
            vec![menu_submenu("middle", vec![menu_link("inner", "#deep")])],
        )];
        assert_eq!(
            flatten_labels(&three_levels),
            ["outer", "middle", "inner"]
        );
    }

    #[test]
    fn item_keys_follow_tree_position() {
        assert_eq!(item_key(&[0]), "0");
        assert_eq!(item_key(&[1, 0, 2]), "1.0.2");
        // Sibling positions never collide with nested positions.
        assert_ne!(item_key(&[1, 2]), item_key(&[12]));
    }

    #[test]
    fn submenus_start_closed_and_toggling_is_an_idempotent_pair() {
        let expanded = Mutable::new(IndexSet::new());

        assert!(!is_expanded(&expanded, "1"));
        toggle_expanded(&expanded, "1");
        assert!(is_expanded(&expanded, "1"));
        toggle_expanded(&expanded, "1");
        assert!(!is_expanded(&expanded, "1"));
    }

    #[test]
    fn toggling_one_submenu_leaves_siblings_and_ancestors_alone() {
        let expanded = Mutable::new(IndexSet::new());

        // Ancestor and two nested siblings open.
        toggle_expanded(&expanded, "1");
        toggle_expanded(&expanded, "1.0");
        toggle_expanded(&expanded, "1.1");

        toggle_expanded(&expanded, "1.0");
        assert!(!is_expanded(&expanded, "1.0"));
        assert!(is_expanded(&expanded, "1.1"));
        assert!(is_expanded(&expanded, "1"));
    }

    #[test]
    fn multiple_submenus_may_be_open_at_once() {
        let expanded = Mutable::new(IndexSet::new());

        toggle_expanded(&expanded, "0");
        toggle_expanded(&expanded, "1");
        toggle_expanded(&expanded, "2.0");

        assert!(is_expanded(&expanded, "0"));
        assert!(is_expanded(&expanded, "1"));
        assert!(is_expanded(&expanded, "2.0"));
    }

    #[test]
    fn empty_submenu_still_has_a_toggleable_key() {
        let items = vec![menu_submenu("empty", vec![])];
        assert_eq!(flatten_labels(&items), ["empty"]);

        let expanded = Mutable::new(IndexSet::new());
        toggle_expanded(&expanded, "0");
        assert!(is_expanded(&expanded, "0"));
    }
}
