#![forbid(unsafe_code)]

//! Resolves the sidebar tree against the current path and expansion state.

use std::collections::BTreeSet;

use peopledesk_kernel_contracts::nav::{NavIcon, NavItem};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NavEntryView {
    pub title: String,
    pub path: Option<String>,
    pub icon: Option<NavIcon>,
    pub is_group: bool,
    pub active: bool,
    pub expanded: bool,
    /// False while the group is closed or the sidebar is in rail mode.
    pub children_visible: bool,
    pub children: Vec<NavEntryView>,
}

/// A group is active when any sub-item matches, whether or not it is expanded.
pub fn resolve_nav_view(
    items: &[NavItem],
    current_path: &str,
    expanded: &BTreeSet<String>,
    rail_collapsed: bool,
) -> Vec<NavEntryView> {
    items
        .iter()
        .map(|item| resolve_item(item, current_path, expanded, rail_collapsed))
        .collect()
}

fn resolve_item(
    item: &NavItem,
    current_path: &str,
    expanded: &BTreeSet<String>,
    rail_collapsed: bool,
) -> NavEntryView {
    match item {
        NavItem::Link { title, path, icon } => NavEntryView {
            title: title.clone(),
            path: Some(path.clone()),
            icon: *icon,
            is_group: false,
            active: path == current_path,
            expanded: false,
            children_visible: false,
            children: Vec::new(),
        },
        NavItem::Group {
            title,
            icon,
            sub_items,
        } => {
            let children = resolve_nav_view(sub_items, current_path, expanded, rail_collapsed);
            let is_expanded = expanded.contains(title);
            NavEntryView {
                title: title.clone(),
                path: None,
                icon: *icon,
                is_group: true,
                active: children.iter().any(|c| c.active),
                expanded: is_expanded,
                children_visible: is_expanded && !rail_collapsed,
                children,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peopledesk_kernel_contracts::nav::default_menu;

    fn set(titles: &[&str]) -> BTreeSet<String> {
        titles.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn at_nav_view_01_link_active_on_exact_path() {
        let view = resolve_nav_view(&default_menu(), "/profile", &set(&[]), false);
        let active: Vec<_> = view.iter().filter(|e| e.active).map(|e| e.title.as_str()).collect();
        assert_eq!(active, vec!["Profile"]);
    }

    #[test]
    fn at_nav_view_02_group_active_while_collapsed() {
        let view = resolve_nav_view(&default_menu(), "/training/attended", &set(&[]), false);
        let training = view.iter().find(|e| e.title == "Training").unwrap();
        assert!(training.active);
        assert!(!training.expanded);
        assert!(!training.children_visible);
        assert!(training.children[0].active);
        assert!(!training.children[1].active);
    }

    #[test]
    fn at_nav_view_03_rail_mode_hides_expanded_children() {
        let expanded = set(&["Admin"]);
        let open = resolve_nav_view(&default_menu(), "/", &expanded, false);
        let rail = resolve_nav_view(&default_menu(), "/", &expanded, true);
        let admin_open = open.iter().find(|e| e.title == "Admin").unwrap();
        let admin_rail = rail.iter().find(|e| e.title == "Admin").unwrap();
        assert!(admin_open.children_visible);
        assert!(admin_rail.expanded);
        assert!(!admin_rail.children_visible);
    }

    #[test]
    fn at_nav_view_04_unknown_path_activates_nothing() {
        let view = resolve_nav_view(&default_menu(), "/nowhere", &set(&["Training"]), false);
        assert!(view.iter().all(|e| !e.active));
    }
}
