#![forbid(unsafe_code)]

use chrono::NaiveDate;
use peopledesk_kernel_contracts::rollon::{RollOnAssignment, RollOnRecord};
use peopledesk_kernel_contracts::training::{ImpartedExtras, TrainingImpartedRecord};
use peopledesk_kernel_contracts::{RecordId, RecordStatus};
use peopledesk_storage::ledger::{RecordLedger, StorageError};
use peopledesk_storage::seed;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn at_ledger_db_01_seeded_ledgers_match_mock_rows() {
    let certs = seed::seeded_certification_ledger().unwrap();
    assert_eq!(certs.len(), 3);
    assert_eq!(certs.rows()[2].authority, "Google");
    assert_eq!(certs.rows()[2].status, RecordStatus::Expired);

    assert_eq!(seed::seeded_training_attended_ledger().unwrap().len(), 2);
    assert_eq!(seed::seeded_training_imparted_ledger().unwrap().len(), 2);

    let roll_ons = seed::seeded_roll_on_ledger().unwrap();
    assert_eq!(roll_ons.rows()[0].employee_id, "EMP001");
    assert_eq!(roll_ons.rows()[1].role.as_deref(), Some("Backend Developer"));
}

#[test]
fn at_ledger_db_02_append_continues_after_seed_rows() {
    let mut ledger = seed::seeded_roll_on_ledger().unwrap();
    let before = ledger.len();
    let row = ledger
        .append_with(|id| {
            RollOnRecord::v1(
                id,
                "Asha Rao",
                "EMP003",
                "Healthcare Portal",
                "HealthcarePlus",
                RollOnAssignment::default(),
                d(2024, 7, 1),
                RecordStatus::Active,
            )
        })
        .unwrap();
    assert_eq!(row.id, RecordId(before as u64 + 1));
    assert_eq!(ledger.len(), before + 1);
    assert_eq!(ledger.rows().last().unwrap().employee_name, "Asha Rao");
}

#[test]
fn at_ledger_db_03_rows_are_append_only() {
    let mut ledger = seed::seeded_certification_ledger().unwrap();
    let snapshot = ledger.rows().to_vec();
    assert_eq!(
        ledger.attempt_overwrite_row(RecordId(1)),
        Err(StorageError::AppendOnlyViolation {
            table: "certifications"
        })
    );
    assert!(matches!(
        ledger.attempt_delete_row(RecordId(2)),
        Err(StorageError::AppendOnlyViolation { .. })
    ));
    assert_eq!(ledger.rows(), snapshot.as_slice());
}

#[test]
fn at_ledger_db_04_invalid_row_is_not_appended() {
    let mut ledger: RecordLedger<TrainingImpartedRecord> =
        seed::seeded_training_imparted_ledger().unwrap();
    let err = ledger
        .append_with(|id| {
            TrainingImpartedRecord::v1(
                id,
                "Rust Basics",
                "Technical",
                d(2024, 5, 3),
                d(2024, 5, 1),
                "2",
                "4",
                10,
                ImpartedExtras::default(),
                RecordStatus::Scheduled,
            )
        })
        .unwrap_err();
    assert!(matches!(err, StorageError::ContractViolation(_)));
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.next_id(), RecordId(3));
}

#[test]
fn at_ledger_db_05_get_finds_rows_by_id() {
    let ledger = seed::seeded_training_attended_ledger().unwrap();
    assert_eq!(
        ledger.get(RecordId(2)).map(|r| r.course_name.as_str()),
        Some("Leadership Skills")
    );
    assert!(ledger.get(RecordId(99)).is_none());
}
