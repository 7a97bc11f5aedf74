#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use peopledesk_kernel_contracts::certification::CertificationRecord;
use peopledesk_kernel_contracts::rollon::RollOnRecord;
use peopledesk_kernel_contracts::training::{TrainingAttendedRecord, TrainingImpartedRecord};
use peopledesk_kernel_contracts::{ContractViolation, RecordId, Validate};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("duplicate key in {table}: {key}")]
    DuplicateKey { table: &'static str, key: String },
    #[error("{table} is append-only")]
    AppendOnlyViolation { table: &'static str },
    #[error("contract violation: {0}")]
    ContractViolation(#[from] ContractViolation),
}

/// A row kept in an append-only ledger.
pub trait LedgerRecord: Validate + Clone {
    const TABLE: &'static str;

    fn record_id(&self) -> RecordId;
}

impl LedgerRecord for CertificationRecord {
    const TABLE: &'static str = "certifications";

    fn record_id(&self) -> RecordId {
        self.id
    }
}

impl LedgerRecord for TrainingAttendedRecord {
    const TABLE: &'static str = "training_attended";

    fn record_id(&self) -> RecordId {
        self.id
    }
}

impl LedgerRecord for TrainingImpartedRecord {
    const TABLE: &'static str = "training_imparted";

    fn record_id(&self) -> RecordId {
        self.id
    }
}

impl LedgerRecord for RollOnRecord {
    const TABLE: &'static str = "roll_ons";

    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Monotonic id source. Issued ids are never handed out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordIdSequence {
    next: u64,
}

impl RecordIdSequence {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: first.max(1),
        }
    }

    pub fn peek(&self) -> RecordId {
        RecordId(self.next)
    }

    fn advance(&mut self) {
        self.next = self.next.saturating_add(1);
    }
}

impl Default for RecordIdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[derive(Debug, Clone)]
pub struct RecordLedger<R: LedgerRecord> {
    rows: Vec<R>,
    ids: RecordIdSequence,
}

impl<R: LedgerRecord> Default for RecordLedger<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: LedgerRecord> RecordLedger<R> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            ids: RecordIdSequence::default(),
        }
    }

    /// Ledger pre-filled with `rows` in order. The sequence resumes after the highest seed id.
    pub fn with_seed_rows(rows: Vec<R>) -> Result<Self, StorageError> {
        let mut seen = BTreeSet::new();
        for row in &rows {
            row.validate()?;
            if !seen.insert(row.record_id()) {
                return Err(StorageError::DuplicateKey {
                    table: R::TABLE,
                    key: row.record_id().to_string(),
                });
            }
        }
        let first = seen.last().map_or(1, |id| id.0.saturating_add(1));
        Ok(Self {
            rows,
            ids: RecordIdSequence::starting_at(first),
        })
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.rows.iter().find(|r| r.record_id() == id)
    }

    pub fn next_id(&self) -> RecordId {
        self.ids.peek()
    }

    /// Builds a row with the next id and appends it. The id is consumed only on success.
    pub fn append_with<F>(&mut self, build: F) -> Result<&R, StorageError>
    where
        F: FnOnce(RecordId) -> Result<R, ContractViolation>,
    {
        let id = self.ids.peek();
        let row = build(id)?;
        row.validate()?;
        if row.record_id() != id {
            return Err(StorageError::ContractViolation(
                ContractViolation::InvalidValue {
                    field: "record_id",
                    reason: "must equal the id issued by the ledger",
                },
            ));
        }
        self.ids.advance();
        let idx = self.rows.len();
        self.rows.push(row);
        Ok(&self.rows[idx])
    }

    pub fn attempt_overwrite_row(&mut self, _id: RecordId) -> Result<(), StorageError> {
        Err(StorageError::AppendOnlyViolation { table: R::TABLE })
    }

    pub fn attempt_delete_row(&mut self, _id: RecordId) -> Result<(), StorageError> {
        Err(StorageError::AppendOnlyViolation { table: R::TABLE })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use peopledesk_kernel_contracts::RecordStatus;

    fn cert(id: u64) -> CertificationRecord {
        CertificationRecord::v1(
            RecordId(id),
            "AWS",
            "Cloud Practitioner",
            "Cloud",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            RecordStatus::Active,
        )
        .unwrap()
    }

    #[test]
    fn at_ledger_01_empty_ledger_issues_one_first() {
        let mut l: RecordLedger<CertificationRecord> = RecordLedger::new();
        let id = l.append_with(|id| Ok(cert(id.0))).unwrap().id;
        assert_eq!(id, RecordId(1));
        assert_eq!(l.next_id(), RecordId(2));
    }

    #[test]
    fn at_ledger_02_failed_build_does_not_consume_id() {
        let mut l: RecordLedger<CertificationRecord> = RecordLedger::new();
        let err = l
            .append_with(|_| {
                Err(ContractViolation::InvalidValue {
                    field: "x",
                    reason: "y",
                })
            })
            .unwrap_err();
        assert!(matches!(err, StorageError::ContractViolation(_)));
        assert_eq!(l.next_id(), RecordId(1));
        assert!(l.is_empty());
    }

    #[test]
    fn at_ledger_03_builder_cannot_choose_its_own_id() {
        let mut l: RecordLedger<CertificationRecord> = RecordLedger::new();
        assert!(l.append_with(|_| Ok(cert(9))).is_err());
        assert!(l.is_empty());
    }

    #[test]
    fn at_ledger_04_seed_duplicates_are_rejected() {
        let err = RecordLedger::with_seed_rows(vec![cert(1), cert(1)]).unwrap_err();
        assert_eq!(
            err,
            StorageError::DuplicateKey {
                table: "certifications",
                key: "1".to_string()
            }
        );
    }
}
