#![forbid(unsafe_code)]

//! Route table: the path -> page mapping any routing layer must satisfy.

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum PageId {
    Dashboard,
    Profile,
    Certification,
    TrainingAttended,
    TrainingImparted,
    ProjectRollOn,
    ProjectRollOff,
    TeamMovement,
    AdminEmployeeData,
    AdminRollOn,
    AdminRollOff,
    AdminSettings,
    Registration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PageAvailability {
    Implemented,
    /// Static placeholder served as a normal page.
    ComingSoon,
    /// Declared capability with no behaviour behind it yet.
    NotImplemented,
}

impl PageId {
    pub const ALL: [PageId; 13] = [
        PageId::Dashboard,
        PageId::Profile,
        PageId::Certification,
        PageId::TrainingAttended,
        PageId::TrainingImparted,
        PageId::ProjectRollOn,
        PageId::ProjectRollOff,
        PageId::TeamMovement,
        PageId::AdminEmployeeData,
        PageId::AdminRollOn,
        PageId::AdminRollOff,
        PageId::AdminSettings,
        PageId::Registration,
    ];

    pub fn path(self) -> &'static str {
        match self {
            PageId::Dashboard => "/",
            PageId::Profile => "/profile",
            PageId::Certification => "/certification",
            PageId::TrainingAttended => "/training/attended",
            PageId::TrainingImparted => "/training/imparted",
            PageId::ProjectRollOn => "/project/roll-on",
            PageId::ProjectRollOff => "/project/roll-off",
            PageId::TeamMovement => "/project/team-movement",
            PageId::AdminEmployeeData => "/admin/employee-data",
            PageId::AdminRollOn => "/admin/roll-on",
            PageId::AdminRollOff => "/admin/roll-off",
            PageId::AdminSettings => "/admin/settings",
            PageId::Registration => "/registration",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard Overview",
            PageId::Profile => "My Profile",
            PageId::Certification => "Certification Management",
            PageId::TrainingAttended => "Training Attended",
            PageId::TrainingImparted => "Training Imparted",
            PageId::ProjectRollOn => "Project Roll On",
            PageId::ProjectRollOff => "Project Roll Off",
            PageId::TeamMovement => "Team Movement",
            PageId::AdminEmployeeData => "Update Employee Data",
            PageId::AdminRollOn => "Update Roll On",
            PageId::AdminRollOff => "Update Roll Off",
            PageId::AdminSettings => "System Settings",
            PageId::Registration => "Employee Registration",
        }
    }

    /// Stable capability name reported by not-implemented pages.
    pub fn capability(self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::Profile => "profile",
            PageId::Certification => "certification",
            PageId::TrainingAttended => "training_attended",
            PageId::TrainingImparted => "training_imparted",
            PageId::ProjectRollOn => "project_roll_on",
            PageId::ProjectRollOff => "project_roll_off",
            PageId::TeamMovement => "project_team_movement",
            PageId::AdminEmployeeData => "admin_employee_data",
            PageId::AdminRollOn => "admin_roll_on",
            PageId::AdminRollOff => "admin_roll_off",
            PageId::AdminSettings => "admin_settings",
            PageId::Registration => "registration",
        }
    }

    pub fn availability(self) -> PageAvailability {
        match self {
            PageId::Dashboard
            | PageId::Profile
            | PageId::Certification
            | PageId::TrainingAttended
            | PageId::TrainingImparted
            | PageId::ProjectRollOn => PageAvailability::Implemented,
            PageId::Registration => PageAvailability::ComingSoon,
            PageId::ProjectRollOff
            | PageId::TeamMovement
            | PageId::AdminEmployeeData
            | PageId::AdminRollOn
            | PageId::AdminRollOff
            | PageId::AdminSettings => PageAvailability::NotImplemented,
        }
    }

    /// Exact match only; no prefix or trailing-slash normalisation.
    pub fn from_path(path: &str) -> Option<PageId> {
        PageId::ALL.into_iter().find(|p| p.path() == path)
    }

    /// URL slug used by the JSON API for the four form+list pages.
    pub fn api_slug(self) -> Option<&'static str> {
        match self {
            PageId::Certification => Some("certification"),
            PageId::TrainingAttended => Some("training-attended"),
            PageId::TrainingImparted => Some("training-imparted"),
            PageId::ProjectRollOn => Some("roll-on"),
            _ => None,
        }
    }

    pub fn from_api_slug(slug: &str) -> Option<PageId> {
        PageId::ALL
            .into_iter()
            .find(|p| p.api_slug().is_some_and(|s| s == slug))
    }
}
