#![forbid(unsafe_code)]

use peopledesk_engines::display::initials;
use peopledesk_kernel_contracts::route::PageId;

use crate::session::SessionContext;
use crate::PortalError;

pub const SETTINGS_CAPABILITY: &str = "settings";
pub const SIGNED_OUT_LABEL: &str = "Signed out";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileMenuAction {
    Profile,
    Settings,
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Navigate(PageId),
    SignedOut,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProfileIdentity {
    pub display_name: String,
    pub initials: String,
    pub signed_in: bool,
}

pub fn identity(session: &SessionContext) -> ProfileIdentity {
    match session.display_name() {
        Some(name) => ProfileIdentity {
            display_name: name.to_string(),
            initials: initials(name),
            signed_in: true,
        },
        None => ProfileIdentity {
            display_name: SIGNED_OUT_LABEL.to_string(),
            initials: String::new(),
            signed_in: false,
        },
    }
}

pub fn select(
    action: ProfileMenuAction,
    session: &mut SessionContext,
) -> Result<MenuOutcome, PortalError> {
    match action {
        ProfileMenuAction::Profile => Ok(MenuOutcome::Navigate(PageId::Profile)),
        ProfileMenuAction::Settings => Err(PortalError::NotImplemented {
            capability: SETTINGS_CAPABILITY,
        }),
        ProfileMenuAction::Logout => {
            session.logout();
            Ok(MenuOutcome::SignedOut)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peopledesk_kernel_contracts::session::EmployeeName;

    fn session(name: &str) -> SessionContext {
        SessionContext::signed_in(EmployeeName::new(name).unwrap())
    }

    #[test]
    fn at_menu_01_initials_from_session_name() {
        assert_eq!(identity(&session("Shruthi")).initials, "S");
        assert_eq!(identity(&session("Jane Smith")).initials, "JS");
        let out = identity(&SessionContext::signed_out());
        assert!(!out.signed_in);
        assert_eq!(out.display_name, "Signed out");
    }

    #[test]
    fn at_menu_02_actions() {
        let mut s = session("Shruthi");
        assert_eq!(
            select(ProfileMenuAction::Profile, &mut s).unwrap(),
            MenuOutcome::Navigate(PageId::Profile)
        );
        assert_eq!(
            select(ProfileMenuAction::Settings, &mut s).unwrap_err(),
            PortalError::NotImplemented {
                capability: "settings"
            }
        );
        assert!(s.is_signed_in());
        assert_eq!(
            select(ProfileMenuAction::Logout, &mut s).unwrap(),
            MenuOutcome::SignedOut
        );
        assert!(!s.is_signed_in());
    }
}
