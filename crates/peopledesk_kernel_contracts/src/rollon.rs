#![forbid(unsafe_code)]

use chrono::NaiveDate;

use crate::common::{validate_opt_text, validate_text};
use crate::form::{FieldKind, FieldSpec, FormSection, FormSpec, TableSpec};
use crate::{ContractViolation, RecordId, RecordStatus, SchemaVersion, Validate};

pub const ROLLON_CONTRACT_VERSION: SchemaVersion = SchemaVersion(1);

pub const PROJECTS: &[&str] = &[
    "E-Commerce Platform",
    "Mobile Banking App",
    "Healthcare Portal",
    "Education Management System",
    "CRM Dashboard",
    "Analytics Platform",
];

pub const CLIENTS: &[&str] = &[
    "TechCorp Inc",
    "FinanceBank",
    "HealthcarePlus",
    "EduTech Solutions",
    "BusinessPro",
    "DataInsights Co",
];

pub const ROLES: &[&str] = &[
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "UI/UX Designer",
    "DevOps Engineer",
    "QA Engineer",
    "Project Manager",
];

pub const LOCATIONS: &[&str] = &[
    "Bangalore",
    "Mumbai",
    "Delhi",
    "Chennai",
    "Hyderabad",
    "Pune",
    "Remote",
];

pub mod fields {
    pub const EMPLOYEE_NAME: &str = "employee_name";
    pub const EMPLOYEE_ID: &str = "employee_id";
    pub const PROJECT_NAME: &str = "project_name";
    pub const CLIENT_NAME: &str = "client_name";
    pub const ROLE: &str = "role";
    pub const REPORTING_MANAGER: &str = "reporting_manager";
    pub const LOCATION: &str = "location";
    pub const ROLL_ON_DATE: &str = "roll_on_date";
}

pub const ROLL_ON_FORM: FormSpec = FormSpec {
    id: "project_roll_on",
    submit_label: "Roll On Employee",
    sections: &[FormSection {
        title: "Roll On Employee",
        description: "Assign an employee to a new project",
        fields: &[
            FieldSpec {
                key: fields::EMPLOYEE_NAME,
                label: "Employee Name",
                kind: FieldKind::Text,
                required: true,
                placeholder: "Enter employee name",
            },
            FieldSpec {
                key: fields::EMPLOYEE_ID,
                label: "Employee ID",
                kind: FieldKind::Text,
                required: true,
                placeholder: "Enter employee ID",
            },
            FieldSpec {
                key: fields::PROJECT_NAME,
                label: "Project Name",
                kind: FieldKind::Select(PROJECTS),
                required: true,
                placeholder: "Select project",
            },
            FieldSpec {
                key: fields::CLIENT_NAME,
                label: "Client Name",
                kind: FieldKind::Select(CLIENTS),
                required: true,
                placeholder: "Select client",
            },
            FieldSpec {
                key: fields::ROLE,
                label: "Role",
                kind: FieldKind::Select(ROLES),
                required: false,
                placeholder: "Select role",
            },
            FieldSpec {
                key: fields::REPORTING_MANAGER,
                label: "Reporting Manager",
                kind: FieldKind::Text,
                required: false,
                placeholder: "Enter reporting manager",
            },
            FieldSpec {
                key: fields::LOCATION,
                label: "Location",
                kind: FieldKind::Select(LOCATIONS),
                required: false,
                placeholder: "Select location",
            },
            FieldSpec {
                key: fields::ROLL_ON_DATE,
                label: "Roll On Date",
                kind: FieldKind::Date,
                required: true,
                placeholder: "Pick a date",
            },
        ],
    }],
    date_ranges: &[],
};

pub const ROLL_ON_TABLE: TableSpec = TableSpec {
    title: "Recent Roll Ons",
    description: "Employees recently rolled on to projects",
    columns: &["Employee", "Project", "Client", "Roll On Date", "Status"],
};

/// Optional assignment details captured alongside a roll-on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollOnAssignment {
    pub role: Option<String>,
    pub reporting_manager: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RollOnRecord {
    pub schema_version: u32,
    pub id: RecordId,
    pub employee_name: String,
    pub employee_id: String,
    pub project_name: String,
    pub client_name: String,
    pub role: Option<String>,
    pub reporting_manager: Option<String>,
    pub location: Option<String>,
    pub roll_on_date: NaiveDate,
    pub status: RecordStatus,
}

impl RollOnRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn v1(
        id: RecordId,
        employee_name: impl Into<String>,
        employee_id: impl Into<String>,
        project_name: impl Into<String>,
        client_name: impl Into<String>,
        assignment: RollOnAssignment,
        roll_on_date: NaiveDate,
        status: RecordStatus,
    ) -> Result<Self, ContractViolation> {
        let r = Self {
            schema_version: ROLLON_CONTRACT_VERSION.0,
            id,
            employee_name: employee_name.into(),
            employee_id: employee_id.into(),
            project_name: project_name.into(),
            client_name: client_name.into(),
            role: assignment.role,
            reporting_manager: assignment.reporting_manager,
            location: assignment.location,
            roll_on_date,
            status,
        };
        r.validate()?;
        Ok(r)
    }
}

impl Validate for RollOnRecord {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.schema_version != ROLLON_CONTRACT_VERSION.0 {
            return Err(ContractViolation::InvalidValue {
                field: "roll_on_record.schema_version",
                reason: "must match ROLLON_CONTRACT_VERSION",
            });
        }
        self.id.validate()?;
        validate_text("roll_on_record.employee_name", &self.employee_name, 128)?;
        validate_text("roll_on_record.employee_id", &self.employee_id, 64)?;
        validate_text("roll_on_record.project_name", &self.project_name, 128)?;
        validate_text("roll_on_record.client_name", &self.client_name, 128)?;
        validate_opt_text("roll_on_record.role", &self.role, 64)?;
        validate_opt_text(
            "roll_on_record.reporting_manager",
            &self.reporting_manager,
            128,
        )?;
        validate_opt_text("roll_on_record.location", &self.location, 64)?;
        if self.status != RecordStatus::Active {
            return Err(ContractViolation::InvalidValue {
                field: "roll_on_record.status",
                reason: "must be Active",
            });
        }
        Ok(())
    }
}
