#![forbid(unsafe_code)]

use chrono::NaiveDate;
use peopledesk_kernel_contracts::form::{parse_date_input, FormDraft, FormSpec};
use peopledesk_kernel_contracts::notice::PROFILE_SAVED_DESCRIPTION;
use peopledesk_kernel_contracts::profile::{PROFILE_FORM, PROFILE_SEED_VALUES};
use peopledesk_kernel_contracts::ContractViolation;
use tracing::info;

use crate::PortalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileMode {
    Viewing,
    Editing,
}

impl ProfileMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileMode::Viewing => "viewing",
            ProfileMode::Editing => "editing",
        }
    }
}

/// Employee profile. Edits go straight into the live values; there is no
/// snapshot to roll back to.
#[derive(Debug, Clone)]
pub struct ProfilePage {
    mode: ProfileMode,
    values: FormDraft,
}

impl ProfilePage {
    pub fn seeded() -> Result<Self, ContractViolation> {
        let mut values = FormDraft::empty();
        for (key, value) in PROFILE_SEED_VALUES {
            values.set_value(&PROFILE_FORM, key, *value)?;
        }
        Ok(Self {
            mode: ProfileMode::Viewing,
            values,
        })
    }

    pub fn form(&self) -> &'static FormSpec {
        &PROFILE_FORM
    }

    pub fn mode(&self) -> ProfileMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == ProfileMode::Editing
    }

    pub fn values(&self) -> &FormDraft {
        &self.values
    }

    pub fn edit(&mut self) -> Result<(), PortalError> {
        self.require(ProfileMode::Viewing, "edit")?;
        self.mode = ProfileMode::Editing;
        Ok(())
    }

    pub fn set_value(&mut self, field: &str, value: &str) -> Result<(), PortalError> {
        self.require(ProfileMode::Editing, "change a field")?;
        self.values.set_value(&PROFILE_FORM, field, value)?;
        Ok(())
    }

    pub fn set_date(&mut self, field: &str, date: Option<NaiveDate>) -> Result<(), PortalError> {
        self.require(ProfileMode::Editing, "change a field")?;
        self.values.set_date(&PROFILE_FORM, field, date)?;
        Ok(())
    }

    pub fn set_date_input(&mut self, field: &str, raw: &str) -> Result<(), PortalError> {
        let date = parse_date_input(raw)?;
        self.set_date(field, date)
    }

    /// Applies posted `(field, value)` pairs while editing. Nothing is applied on error.
    pub fn apply_entries(&mut self, entries: &[(String, String)]) -> Result<(), PortalError> {
        self.require(ProfileMode::Editing, "change a field")?;
        let mut next = self.values.clone();
        for (key, value) in entries {
            let field = PROFILE_FORM
                .field(key)
                .ok_or_else(|| ContractViolation::UnknownField { field: key.clone() })?;
            if field.kind.is_date() {
                next.set_date(&PROFILE_FORM, key, parse_date_input(value)?)?;
            } else {
                next.set_value(&PROFILE_FORM, key, value.as_str())?;
            }
        }
        self.values = next;
        Ok(())
    }

    /// Leaves edit mode. Values are kept as entered, unvalidated.
    pub fn save(&mut self) -> Result<&'static str, PortalError> {
        self.require(ProfileMode::Editing, "save")?;
        self.mode = ProfileMode::Viewing;
        info!("profile saved");
        Ok(PROFILE_SAVED_DESCRIPTION)
    }

    fn require(&self, mode: ProfileMode, action: &'static str) -> Result<(), PortalError> {
        if self.mode != mode {
            return Err(PortalError::InvalidTransition {
                action,
                state: self.mode.as_str(),
            });
        }
        Ok(())
    }
}
