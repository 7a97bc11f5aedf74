#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use peopledesk_engines::nav_view::{resolve_nav_view, NavEntryView};
use peopledesk_kernel_contracts::nav::{validate_nav_tree, NavItem};
use peopledesk_kernel_contracts::ContractViolation;
use tracing::debug;

/// Sidebar state: which groups are open and whether the sidebar is in rail mode.
#[derive(Debug, Clone)]
pub struct NavigationShell {
    items: Vec<NavItem>,
    expanded: BTreeSet<String>,
    rail_collapsed: bool,
}

impl NavigationShell {
    pub fn new(items: Vec<NavItem>) -> Result<Self, ContractViolation> {
        validate_nav_tree(&items)?;
        Ok(Self {
            items,
            expanded: BTreeSet::new(),
            rail_collapsed: false,
        })
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Flips the group's membership in the expanded set and returns the new state.
    pub fn toggle_group(&mut self, title: &str) -> Result<bool, ContractViolation> {
        if !contains_group(&self.items, title) {
            return Err(ContractViolation::InvalidValue {
                field: "navigation.group",
                reason: "no group with this title",
            });
        }
        let now_expanded = if self.expanded.remove(title) {
            false
        } else {
            self.expanded.insert(title.to_string());
            true
        };
        debug!(group = title, expanded = now_expanded, "nav group toggled");
        Ok(now_expanded)
    }

    pub fn is_expanded(&self, title: &str) -> bool {
        self.expanded.contains(title)
    }

    pub fn expanded_groups(&self) -> &BTreeSet<String> {
        &self.expanded
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.rail_collapsed = !self.rail_collapsed;
        debug!(rail_collapsed = self.rail_collapsed, "sidebar toggled");
        self.rail_collapsed
    }

    pub fn is_rail_collapsed(&self) -> bool {
        self.rail_collapsed
    }

    pub fn view(&self, current_path: &str) -> Vec<NavEntryView> {
        resolve_nav_view(
            &self.items,
            current_path,
            &self.expanded,
            self.rail_collapsed,
        )
    }
}

fn contains_group(items: &[NavItem], title: &str) -> bool {
    items.iter().any(|item| {
        (item.is_group() && item.title() == title) || contains_group(item.sub_items(), title)
    })
}
