#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use crate::common::validate_text;
use crate::route::PageId;
use crate::{ContractViolation, Validate};

pub const PORTAL_TITLE: &str = "Employee Portal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum NavIcon {
    Home,
    User,
    Award,
    GraduationCap,
    FolderKanban,
    Settings,
}

impl NavIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            NavIcon::Home => "home",
            NavIcon::User => "user",
            NavIcon::Award => "award",
            NavIcon::GraduationCap => "graduation-cap",
            NavIcon::FolderKanban => "folder-kanban",
            NavIcon::Settings => "settings",
        }
    }
}

/// Sidebar entry. A link carries a path; a group carries sub-items and no path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link {
        title: String,
        path: String,
        icon: Option<NavIcon>,
    },
    Group {
        title: String,
        icon: Option<NavIcon>,
        sub_items: Vec<NavItem>,
    },
}

impl NavItem {
    pub fn link(title: impl Into<String>, path: impl Into<String>, icon: Option<NavIcon>) -> Self {
        NavItem::Link {
            title: title.into(),
            path: path.into(),
            icon,
        }
    }

    pub fn page(page: PageId, title: impl Into<String>, icon: Option<NavIcon>) -> Self {
        NavItem::link(title, page.path(), icon)
    }

    pub fn group(title: impl Into<String>, icon: Option<NavIcon>, sub_items: Vec<NavItem>) -> Self {
        NavItem::Group {
            title: title.into(),
            icon,
            sub_items,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            NavItem::Link { title, .. } | NavItem::Group { title, .. } => title,
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            NavItem::Link { path, .. } => Some(path),
            NavItem::Group { .. } => None,
        }
    }

    pub fn icon(&self) -> Option<NavIcon> {
        match self {
            NavItem::Link { icon, .. } | NavItem::Group { icon, .. } => *icon,
        }
    }

    pub fn sub_items(&self) -> &[NavItem] {
        match self {
            NavItem::Link { .. } => &[],
            NavItem::Group { sub_items, .. } => sub_items,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, NavItem::Group { .. })
    }
}

impl Validate for NavItem {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_text("nav_item.title", self.title(), 64)?;
        match self {
            NavItem::Link { path, .. } => {
                if !path.starts_with('/') {
                    return Err(ContractViolation::InvalidValue {
                        field: "nav_item.path",
                        reason: "must start with '/'",
                    });
                }
            }
            NavItem::Group { sub_items, .. } => {
                if sub_items.is_empty() {
                    return Err(ContractViolation::InvalidValue {
                        field: "nav_item.sub_items",
                        reason: "group must have at least one sub-item",
                    });
                }
                for item in sub_items {
                    item.validate()?;
                }
            }
        }
        Ok(())
    }
}

/// Validates every item and the tree-wide uniqueness of group titles.
pub fn validate_nav_tree(items: &[NavItem]) -> Result<(), ContractViolation> {
    fn collect<'a>(
        items: &'a [NavItem],
        groups: &mut BTreeSet<&'a str>,
    ) -> Result<(), ContractViolation> {
        for item in items {
            if item.is_group() {
                if !groups.insert(item.title()) {
                    return Err(ContractViolation::InvalidValue {
                        field: "nav_item.title",
                        reason: "group titles must be unique",
                    });
                }
                collect(item.sub_items(), groups)?;
            }
        }
        Ok(())
    }

    for item in items {
        item.validate()?;
    }
    let mut groups = BTreeSet::new();
    collect(items, &mut groups)
}

pub fn default_menu() -> Vec<NavItem> {
    vec![
        NavItem::page(PageId::Dashboard, "Home", Some(NavIcon::Home)),
        NavItem::page(PageId::Profile, "Profile", Some(NavIcon::User)),
        NavItem::page(PageId::Certification, "Certification", Some(NavIcon::Award)),
        NavItem::group(
            "Training",
            Some(NavIcon::GraduationCap),
            vec![
                NavItem::page(PageId::TrainingAttended, "Training Attended", None),
                NavItem::page(PageId::TrainingImparted, "Training Imparted", None),
            ],
        ),
        NavItem::group(
            "Project Management",
            Some(NavIcon::FolderKanban),
            vec![
                NavItem::page(PageId::ProjectRollOn, "Roll On", None),
                NavItem::page(PageId::ProjectRollOff, "Roll Off", None),
                NavItem::page(PageId::TeamMovement, "Team Movement", None),
            ],
        ),
        NavItem::group(
            "Admin",
            Some(NavIcon::Settings),
            vec![
                NavItem::page(PageId::AdminEmployeeData, "Update Employee Data", None),
                NavItem::page(PageId::AdminRollOn, "Update Roll On", None),
                NavItem::page(PageId::AdminRollOff, "Update Roll Off", None),
                NavItem::page(PageId::AdminSettings, "System Settings", None),
            ],
        ),
    ]
}
