#![forbid(unsafe_code)]

use chrono::NaiveDate;

use crate::common::validate_text;
use crate::form::{FieldKind, FieldSpec, FormSection, FormSpec, TableSpec};
use crate::{ContractViolation, RecordId, RecordStatus, SchemaVersion, Validate};

pub const CERTIFICATION_CONTRACT_VERSION: SchemaVersion = SchemaVersion(1);

pub const CERTIFICATION_AUTHORITIES: &[&str] = &[
    "AWS",
    "Microsoft",
    "Google",
    "Oracle",
    "Salesforce",
    "VMware",
    "Cisco",
    "CompTIA",
    "Other",
];

pub const CERTIFICATION_TYPES: &[&str] = &[
    "Cloud",
    "Security",
    "Database",
    "Networking",
    "Programming",
    "Project Management",
    "Other",
];

pub mod fields {
    pub const AUTHORITY: &str = "certification_authority";
    pub const TITLE: &str = "certification_title";
    pub const TYPE: &str = "certification_type";
    pub const ACQUIRED_ON: &str = "certification_date";
}

pub const CERTIFICATION_FORM: FormSpec = FormSpec {
    id: "certification",
    submit_label: "Add Certification",
    sections: &[FormSection {
        title: "Add New Certification",
        description: "Enter certification details to add to your profile",
        fields: &[
            FieldSpec {
                key: fields::AUTHORITY,
                label: "Certification Authority",
                kind: FieldKind::Select(CERTIFICATION_AUTHORITIES),
                required: true,
                placeholder: "Select authority",
            },
            FieldSpec {
                key: fields::TITLE,
                label: "Certification Title",
                kind: FieldKind::Text,
                required: true,
                placeholder: "Enter certification title",
            },
            FieldSpec {
                key: fields::TYPE,
                label: "Certification Type",
                kind: FieldKind::Select(CERTIFICATION_TYPES),
                required: true,
                placeholder: "Select type",
            },
            FieldSpec {
                key: fields::ACQUIRED_ON,
                label: "Certification Acquired Date",
                kind: FieldKind::Date,
                required: true,
                placeholder: "Pick a date",
            },
        ],
    }],
    date_ranges: &[],
};

pub const CERTIFICATION_TABLE: TableSpec = TableSpec {
    title: "My Certifications",
    description: "View all your certifications",
    columns: &["Authority", "Title", "Type", "Date", "Status"],
};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CertificationRecord {
    pub schema_version: u32,
    pub id: RecordId,
    pub authority: String,
    pub title: String,
    pub certification_type: String,
    pub acquired_on: NaiveDate,
    pub status: RecordStatus,
}

impl CertificationRecord {
    pub fn v1(
        id: RecordId,
        authority: impl Into<String>,
        title: impl Into<String>,
        certification_type: impl Into<String>,
        acquired_on: NaiveDate,
        status: RecordStatus,
    ) -> Result<Self, ContractViolation> {
        let r = Self {
            schema_version: CERTIFICATION_CONTRACT_VERSION.0,
            id,
            authority: authority.into(),
            title: title.into(),
            certification_type: certification_type.into(),
            acquired_on,
            status,
        };
        r.validate()?;
        Ok(r)
    }
}

impl Validate for CertificationRecord {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.schema_version != CERTIFICATION_CONTRACT_VERSION.0 {
            return Err(ContractViolation::InvalidValue {
                field: "certification_record.schema_version",
                reason: "must match CERTIFICATION_CONTRACT_VERSION",
            });
        }
        self.id.validate()?;
        validate_text("certification_record.authority", &self.authority, 64)?;
        validate_text("certification_record.title", &self.title, 256)?;
        validate_text(
            "certification_record.certification_type",
            &self.certification_type,
            64,
        )?;
        if !matches!(self.status, RecordStatus::Active | RecordStatus::Expired) {
            return Err(ContractViolation::InvalidValue {
                field: "certification_record.status",
                reason: "must be Active or Expired",
            });
        }
        Ok(())
    }
}
