#![forbid(unsafe_code)]

use peopledesk_kernel_contracts::session::EmployeeName;
use peopledesk_kernel_contracts::ContractViolation;
use tracing::{debug, info};

/// Who is using the portal. Passed to every component that shows the name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    employee: Option<EmployeeName>,
}

impl SessionContext {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(name: EmployeeName) -> Self {
        Self {
            employee: Some(name),
        }
    }

    pub fn employee(&self) -> Option<&EmployeeName> {
        self.employee.as_ref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.employee.as_ref().map(EmployeeName::as_str)
    }

    pub fn is_signed_in(&self) -> bool {
        self.employee.is_some()
    }

    pub fn login(&mut self, name: &str) -> Result<(), ContractViolation> {
        let name = EmployeeName::new(name)?;
        info!(employee = %name, "session started");
        self.employee = Some(name);
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Some(name) = self.employee.take() {
            debug!(employee = %name, "logout");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_session_01_login_and_logout() {
        let mut s = SessionContext::signed_out();
        assert!(!s.is_signed_in());
        s.login("Jane Smith").unwrap();
        assert_eq!(s.display_name(), Some("Jane Smith"));
        s.logout();
        assert_eq!(s.display_name(), None);
    }

    #[test]
    fn at_session_02_blank_login_keeps_previous_name() {
        let mut s = SessionContext::signed_in(EmployeeName::new("Shruthi").unwrap());
        assert!(s.login("  ").is_err());
        assert_eq!(s.display_name(), Some("Shruthi"));
    }
}
