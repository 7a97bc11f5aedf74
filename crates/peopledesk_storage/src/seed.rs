#![forbid(unsafe_code)]

//! Mock rows every ledger starts with after a process restart.

use chrono::NaiveDate;
use peopledesk_kernel_contracts::certification::CertificationRecord;
use peopledesk_kernel_contracts::rollon::{RollOnAssignment, RollOnRecord};
use peopledesk_kernel_contracts::training::{
    ImpartedExtras, TrainingAttendedRecord, TrainingImpartedRecord,
};
use peopledesk_kernel_contracts::{ContractViolation, RecordId, RecordStatus};

use crate::ledger::{RecordLedger, StorageError};

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, ContractViolation> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or(ContractViolation::InvalidValue {
        field: "seed.date",
        reason: "must be a calendar date",
    })
}

pub fn certification_rows() -> Result<Vec<CertificationRecord>, ContractViolation> {
    Ok(vec![
        CertificationRecord::v1(
            RecordId(1),
            "AWS",
            "Solutions Architect Associate",
            "Cloud",
            date(2024, 1, 15)?,
            RecordStatus::Active,
        )?,
        CertificationRecord::v1(
            RecordId(2),
            "Microsoft",
            "Azure Developer Associate",
            "Cloud",
            date(2023, 11, 20)?,
            RecordStatus::Active,
        )?,
        CertificationRecord::v1(
            RecordId(3),
            "Google",
            "Professional Cloud Architect",
            "Cloud",
            date(2023, 8, 10)?,
            RecordStatus::Expired,
        )?,
    ])
}

pub fn training_attended_rows() -> Result<Vec<TrainingAttendedRecord>, ContractViolation> {
    Ok(vec![
        TrainingAttendedRecord::v1(
            RecordId(1),
            "React Advanced Concepts",
            "Technical",
            "John Smith",
            date(2024, 1, 15)?,
            date(2024, 1, 20)?,
            Some("5 days".to_string()),
            RecordStatus::Completed,
        )?,
        TrainingAttendedRecord::v1(
            RecordId(2),
            "Leadership Skills",
            "Soft Skills",
            "Jane Doe",
            date(2023, 12, 10)?,
            date(2023, 12, 12)?,
            Some("3 days".to_string()),
            RecordStatus::Completed,
        )?,
    ])
}

pub fn training_imparted_rows() -> Result<Vec<TrainingImpartedRecord>, ContractViolation> {
    Ok(vec![
        TrainingImpartedRecord::v1(
            RecordId(1),
            "React Fundamentals",
            "Technical",
            date(2024, 2, 1)?,
            date(2024, 2, 5)?,
            "5",
            "8",
            15,
            ImpartedExtras::default(),
            RecordStatus::Completed,
        )?,
        TrainingImpartedRecord::v1(
            RecordId(2),
            "Team Leadership",
            "Soft Skills",
            date(2024, 1, 15)?,
            date(2024, 1, 17)?,
            "3",
            "6",
            12,
            ImpartedExtras::default(),
            RecordStatus::Completed,
        )?,
    ])
}

pub fn roll_on_rows() -> Result<Vec<RollOnRecord>, ContractViolation> {
    Ok(vec![
        RollOnRecord::v1(
            RecordId(1),
            "John Doe",
            "EMP001",
            "E-Commerce Platform",
            "TechCorp Inc",
            RollOnAssignment {
                role: Some("Frontend Developer".to_string()),
                ..RollOnAssignment::default()
            },
            date(2024, 3, 1)?,
            RecordStatus::Active,
        )?,
        RollOnRecord::v1(
            RecordId(2),
            "Jane Smith",
            "EMP002",
            "Mobile Banking App",
            "FinanceBank",
            RollOnAssignment {
                role: Some("Backend Developer".to_string()),
                ..RollOnAssignment::default()
            },
            date(2024, 2, 15)?,
            RecordStatus::Active,
        )?,
    ])
}

pub fn seeded_certification_ledger() -> Result<RecordLedger<CertificationRecord>, StorageError> {
    RecordLedger::with_seed_rows(certification_rows()?)
}

pub fn seeded_training_attended_ledger(
) -> Result<RecordLedger<TrainingAttendedRecord>, StorageError> {
    RecordLedger::with_seed_rows(training_attended_rows()?)
}

pub fn seeded_training_imparted_ledger(
) -> Result<RecordLedger<TrainingImpartedRecord>, StorageError> {
    RecordLedger::with_seed_rows(training_imparted_rows()?)
}

pub fn seeded_roll_on_ledger() -> Result<RecordLedger<RollOnRecord>, StorageError> {
    RecordLedger::with_seed_rows(roll_on_rows()?)
}
