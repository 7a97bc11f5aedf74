#![forbid(unsafe_code)]

//! Training attended and training imparted records.

use chrono::NaiveDate;

use crate::common::{validate_opt_text, validate_text};
use crate::form::{DateRange, FieldKind, FieldSpec, FormSection, FormSpec, TableSpec};
use crate::{ContractViolation, RecordId, RecordStatus, SchemaVersion, Validate};

pub const TRAINING_CONTRACT_VERSION: SchemaVersion = SchemaVersion(1);

/// Attendee counts the placeholder generator draws from: `[MIN, MAX)`.
pub const ATTENDEE_COUNT_MIN: u32 = 5;
pub const ATTENDEE_COUNT_MAX_EXCLUSIVE: u32 = 25;

pub const COURSE_NAMES: &[&str] = &[
    "React Advanced Concepts",
    "Node.js Development",
    "Python Programming",
    "Leadership Skills",
    "Communication Skills",
    "Project Management",
    "DevOps Practices",
    "Database Design",
    "Security Best Practices",
];

pub const TRAINING_TYPES: &[&str] = &[
    "Technical",
    "Soft Skills",
    "Management",
    "Compliance",
    "Safety",
    "Other",
];

pub const FACULTIES: &[&str] = &[
    "John Smith",
    "Jane Doe",
    "Mike Johnson",
    "Sarah Wilson",
    "David Brown",
    "External Trainer",
];

pub mod attended_fields {
    pub const COURSE_NAME: &str = "course_name";
    pub const TRAINING_TYPE: &str = "training_type";
    pub const FACULTY: &str = "faculty";
    pub const START_DATE: &str = "start_date";
    pub const END_DATE: &str = "end_date";
    pub const TOTAL_DURATION: &str = "total_duration";
}

pub mod imparted_fields {
    pub const TRAINING_TYPE: &str = "training_type";
    pub const START_DATE: &str = "start_date";
    pub const END_DATE: &str = "end_date";
    pub const TOTAL_DAYS: &str = "total_days";
    pub const DURATION_PER_DAY: &str = "duration_per_day";
    pub const TRAINING_NAME: &str = "training_name";
    pub const ABC_EDUCATION_EQUIVALENT: &str = "abc_education_equivalent";
    pub const CUSER: &str = "cuser";
    pub const REMARKS: &str = "remarks";
}

pub const TRAINING_ATTENDED_FORM: FormSpec = FormSpec {
    id: "training_attended",
    submit_label: "Add Training Record",
    sections: &[FormSection {
        title: "Add Training Record",
        description: "Record a training session you have attended",
        fields: &[
            FieldSpec {
                key: attended_fields::COURSE_NAME,
                label: "Course Name",
                kind: FieldKind::Select(COURSE_NAMES),
                required: true,
                placeholder: "Select course",
            },
            FieldSpec {
                key: attended_fields::TRAINING_TYPE,
                label: "Training Type",
                kind: FieldKind::Select(TRAINING_TYPES),
                required: true,
                placeholder: "Select type",
            },
            FieldSpec {
                key: attended_fields::FACULTY,
                label: "Faculty",
                kind: FieldKind::Select(FACULTIES),
                required: true,
                placeholder: "Select faculty",
            },
            FieldSpec {
                key: attended_fields::START_DATE,
                label: "Start Date",
                kind: FieldKind::Date,
                required: true,
                placeholder: "Start",
            },
            FieldSpec {
                key: attended_fields::END_DATE,
                label: "End Date",
                kind: FieldKind::Date,
                required: true,
                placeholder: "End",
            },
            FieldSpec {
                key: attended_fields::TOTAL_DURATION,
                label: "Total Duration",
                kind: FieldKind::Text,
                required: false,
                placeholder: "e.g., 5 days, 40 hours",
            },
        ],
    }],
    date_ranges: &[DateRange {
        start: attended_fields::START_DATE,
        end: attended_fields::END_DATE,
    }],
};

pub const TRAINING_ATTENDED_TABLE: TableSpec = TableSpec {
    title: "Training History",
    description: "Your training attendance record",
    columns: &["Course", "Type", "Faculty", "Duration", "Status"],
};

pub const TRAINING_IMPARTED_FORM: FormSpec = FormSpec {
    id: "training_imparted",
    submit_label: "Schedule Training",
    sections: &[FormSection {
        title: "Schedule Training Session",
        description: "Create a new training session that you will conduct",
        fields: &[
            FieldSpec {
                key: imparted_fields::TRAINING_TYPE,
                label: "Training Type",
                kind: FieldKind::Select(TRAINING_TYPES),
                required: true,
                placeholder: "Select type",
            },
            FieldSpec {
                key: imparted_fields::START_DATE,
                label: "Start Date",
                kind: FieldKind::Date,
                required: true,
                placeholder: "Start",
            },
            FieldSpec {
                key: imparted_fields::END_DATE,
                label: "End Date",
                kind: FieldKind::Date,
                required: true,
                placeholder: "End",
            },
            FieldSpec {
                key: imparted_fields::TOTAL_DAYS,
                label: "Total Days",
                kind: FieldKind::Number,
                required: true,
                placeholder: "Number of days",
            },
            FieldSpec {
                key: imparted_fields::DURATION_PER_DAY,
                label: "Duration per Day (hrs)",
                kind: FieldKind::Number,
                required: true,
                placeholder: "Hours per day",
            },
            FieldSpec {
                key: imparted_fields::TRAINING_NAME,
                label: "Training Name",
                kind: FieldKind::Text,
                required: true,
                placeholder: "Enter training name",
            },
            FieldSpec {
                key: imparted_fields::ABC_EDUCATION_EQUIVALENT,
                label: "ABC Education Equivalent",
                kind: FieldKind::Text,
                required: false,
                placeholder: "Education equivalent",
            },
            FieldSpec {
                key: imparted_fields::CUSER,
                label: "CUser",
                kind: FieldKind::Text,
                required: false,
                placeholder: "CUser ID",
            },
            FieldSpec {
                key: imparted_fields::REMARKS,
                label: "Remarks",
                kind: FieldKind::TextArea,
                required: false,
                placeholder: "Additional remarks",
            },
        ],
    }],
    date_ranges: &[DateRange {
        start: imparted_fields::START_DATE,
        end: imparted_fields::END_DATE,
    }],
};

pub const TRAINING_IMPARTED_TABLE: TableSpec = TableSpec {
    title: "Training Sessions",
    description: "Training sessions you have conducted or scheduled",
    columns: &["Training Name", "Type", "Duration", "Attendees", "Status"],
};

fn validate_date_order(
    field: &'static str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(), ContractViolation> {
    if end < start {
        return Err(ContractViolation::InvalidValue {
            field,
            reason: "must not precede start_date",
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrainingAttendedRecord {
    pub schema_version: u32,
    pub id: RecordId,
    pub course_name: String,
    pub training_type: String,
    pub faculty: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Free-text duration as entered; `None` when the field was left blank.
    pub total_duration: Option<String>,
    pub status: RecordStatus,
}

impl TrainingAttendedRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn v1(
        id: RecordId,
        course_name: impl Into<String>,
        training_type: impl Into<String>,
        faculty: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_duration: Option<String>,
        status: RecordStatus,
    ) -> Result<Self, ContractViolation> {
        let r = Self {
            schema_version: TRAINING_CONTRACT_VERSION.0,
            id,
            course_name: course_name.into(),
            training_type: training_type.into(),
            faculty: faculty.into(),
            start_date,
            end_date,
            total_duration,
            status,
        };
        r.validate()?;
        Ok(r)
    }
}

impl Validate for TrainingAttendedRecord {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.schema_version != TRAINING_CONTRACT_VERSION.0 {
            return Err(ContractViolation::InvalidValue {
                field: "training_attended_record.schema_version",
                reason: "must match TRAINING_CONTRACT_VERSION",
            });
        }
        self.id.validate()?;
        validate_text("training_attended_record.course_name", &self.course_name, 128)?;
        validate_text(
            "training_attended_record.training_type",
            &self.training_type,
            64,
        )?;
        validate_text("training_attended_record.faculty", &self.faculty, 128)?;
        validate_opt_text(
            "training_attended_record.total_duration",
            &self.total_duration,
            64,
        )?;
        validate_date_order(
            "training_attended_record.end_date",
            self.start_date,
            self.end_date,
        )?;
        if self.status != RecordStatus::Completed {
            return Err(ContractViolation::InvalidValue {
                field: "training_attended_record.status",
                reason: "must be Completed",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrainingImpartedRecord {
    pub schema_version: u32,
    pub id: RecordId,
    pub training_name: String,
    pub training_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: String,
    pub duration_per_day: String,
    pub attendees: u32,
    pub abc_education_equivalent: Option<String>,
    pub cuser: Option<String>,
    pub remarks: Option<String>,
    pub status: RecordStatus,
}

/// Optional free-text fields of an imparted session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImpartedExtras {
    pub abc_education_equivalent: Option<String>,
    pub cuser: Option<String>,
    pub remarks: Option<String>,
}

impl TrainingImpartedRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn v1(
        id: RecordId,
        training_name: impl Into<String>,
        training_type: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_days: impl Into<String>,
        duration_per_day: impl Into<String>,
        attendees: u32,
        extras: ImpartedExtras,
        status: RecordStatus,
    ) -> Result<Self, ContractViolation> {
        let r = Self {
            schema_version: TRAINING_CONTRACT_VERSION.0,
            id,
            training_name: training_name.into(),
            training_type: training_type.into(),
            start_date,
            end_date,
            total_days: total_days.into(),
            duration_per_day: duration_per_day.into(),
            attendees,
            abc_education_equivalent: extras.abc_education_equivalent,
            cuser: extras.cuser,
            remarks: extras.remarks,
            status,
        };
        r.validate()?;
        Ok(r)
    }
}

impl Validate for TrainingImpartedRecord {
    fn validate(&self) -> Result<(), ContractViolation> {
        if self.schema_version != TRAINING_CONTRACT_VERSION.0 {
            return Err(ContractViolation::InvalidValue {
                field: "training_imparted_record.schema_version",
                reason: "must match TRAINING_CONTRACT_VERSION",
            });
        }
        self.id.validate()?;
        validate_text(
            "training_imparted_record.training_name",
            &self.training_name,
            128,
        )?;
        validate_text(
            "training_imparted_record.training_type",
            &self.training_type,
            64,
        )?;
        validate_text("training_imparted_record.total_days", &self.total_days, 16)?;
        validate_text(
            "training_imparted_record.duration_per_day",
            &self.duration_per_day,
            16,
        )?;
        validate_opt_text(
            "training_imparted_record.abc_education_equivalent",
            &self.abc_education_equivalent,
            128,
        )?;
        validate_opt_text("training_imparted_record.cuser", &self.cuser, 64)?;
        validate_opt_text("training_imparted_record.remarks", &self.remarks, 1024)?;
        validate_date_order(
            "training_imparted_record.end_date",
            self.start_date,
            self.end_date,
        )?;
        if !matches!(
            self.status,
            RecordStatus::Scheduled | RecordStatus::Completed
        ) {
            return Err(ContractViolation::InvalidValue {
                field: "training_imparted_record.status",
                reason: "must be Scheduled or Completed",
            });
        }
        Ok(())
    }
}
