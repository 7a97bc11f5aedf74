#![forbid(unsafe_code)]

use std::fmt;

use crate::common::validate_text;
use crate::{ContractViolation, Validate};

pub const EMPLOYEE_NAME_MAX_CHARS: usize = 128;

/// Display name of the signed-in employee.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EmployeeName(String);

impl EmployeeName {
    pub fn new(name: impl Into<String>) -> Result<Self, ContractViolation> {
        let name = Self(name.into().trim().to_string());
        name.validate()?;
        Ok(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Validate for EmployeeName {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_text("employee_name", &self.0, EMPLOYEE_NAME_MAX_CHARS)
    }
}

impl fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
