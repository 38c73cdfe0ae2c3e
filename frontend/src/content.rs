//! Static site catalog plus the conversion from the shared navigation
//! model into the UI library's render-side menu items.

use bluegene_ui::{MenuItem, menu_link, menu_submenu};
use shared::{MenuNode, SiteContent};
use zoon::*;

static SITE: Lazy<SiteContent> = Lazy::new(SiteContent::bluegene);

pub fn site() -> &'static SiteContent {
    &SITE
}

/// Map the content model onto the menu renderer's item type, preserving
/// order and nesting. A group's children recurse; nothing else carries
/// over (in particular there is no href on a group to carry).
pub fn to_menu_items(nodes: &[MenuNode]) -> Vec<MenuItem> {
    nodes
        .iter()
        .map(|node| match node {
            MenuNode::Leaf { label, href } => menu_link(label.clone(), href.clone()),
            MenuNode::Group { label, children } => {
                menu_submenu(label.clone(), to_menu_items(children))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluegene_ui::flatten_labels;
    use shared::{leaf_hrefs, pre_order_labels};

    fn menu_hrefs(items: &[MenuItem]) -> Vec<String> {
        let mut hrefs = Vec::new();
        for item in items {
            match item {
                MenuItem::Link { href, .. } => hrefs.push(href.clone()),
                MenuItem::Submenu { items, .. } => hrefs.extend(menu_hrefs(items)),
            }
        }
        hrefs
    }

    #[test]
    fn conversion_preserves_pre_order_and_hrefs_for_every_shipped_menu() {
        for menu in &site().menus {
            let items = to_menu_items(&menu.items);
            assert_eq!(flatten_labels(&items), pre_order_labels(&menu.items));
            assert_eq!(menu_hrefs(&items), leaf_hrefs(&menu.items));
        }
    }

    #[test]
    fn link_and_nested_group_convert_to_matching_variants() {
        let nodes = vec![
            MenuNode::leaf("A", "#a"),
            MenuNode::group("B", vec![MenuNode::leaf("C", "#c")]),
        ];

        let items = to_menu_items(&nodes);
        assert_eq!(
            items,
            [
                menu_link("A", "#a"),
                menu_submenu("B", vec![menu_link("C", "#c")]),
            ]
        );
    }

    #[test]
    fn three_level_nesting_survives_conversion() {
        let nodes = vec![MenuNode::group(
            "outer",
            vec![MenuNode::group(
                "middle",
                vec![MenuNode::leaf("inner", "#deep")],
            )],
        )];

        let items = to_menu_items(&nodes);
        assert_eq!(flatten_labels(&items), ["outer", "middle", "inner"]);
        assert_eq!(menu_hrefs(&items), ["#deep"]);

        match &items[0] {
            MenuItem::Submenu { items, .. } => match &items[0] {
                MenuItem::Submenu { items, .. } => {
                    assert_eq!(items[0], menu_link("inner", "#deep"));
                }
                other => panic!("expected nested submenu, got {other:?}"),
            },
            other => panic!("expected submenu, got {other:?}"),
        }
    }

    #[test]
    fn empty_group_converts_to_empty_submenu() {
        let nodes = vec![MenuNode::group("empty", vec![])];
        assert_eq!(to_menu_items(&nodes), [menu_submenu("empty", vec![])]);
    }
}
