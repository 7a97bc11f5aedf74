#![forbid(unsafe_code)]

use peopledesk_engines::display::{status_badge, training_duration_label};
use peopledesk_kernel_contracts::form::{FormDraft, FormSpec, TableSpec};
use peopledesk_kernel_contracts::route::PageId;
use peopledesk_kernel_contracts::training::{
    attended_fields as fields, TrainingAttendedRecord, TRAINING_ATTENDED_FORM,
    TRAINING_ATTENDED_TABLE,
};
use peopledesk_kernel_contracts::{ContractViolation, RecordId, RecordStatus};

use crate::entity_page::{
    optional_text, required_date, required_text, EntityFormListPage, RecordSchema, TableCell,
    TableRow,
};

pub const TRAINING_RECORD_ADDED: &str = "Training record added successfully.";

#[derive(Debug, Clone, Copy, Default)]
pub struct TrainingAttendedSchema;

pub type TrainingAttendedPage = EntityFormListPage<TrainingAttendedSchema>;

impl RecordSchema for TrainingAttendedSchema {
    type Record = TrainingAttendedRecord;

    fn page(&self) -> PageId {
        PageId::TrainingAttended
    }

    fn form(&self) -> &'static FormSpec {
        &TRAINING_ATTENDED_FORM
    }

    fn table(&self) -> &'static TableSpec {
        &TRAINING_ATTENDED_TABLE
    }

    fn success_message(&self) -> &'static str {
        TRAINING_RECORD_ADDED
    }

    fn build(
        &mut self,
        id: RecordId,
        draft: &FormDraft,
    ) -> Result<TrainingAttendedRecord, ContractViolation> {
        TrainingAttendedRecord::v1(
            id,
            required_text(draft, fields::COURSE_NAME)?,
            required_text(draft, fields::TRAINING_TYPE)?,
            required_text(draft, fields::FACULTY)?,
            required_date(draft, fields::START_DATE)?,
            required_date(draft, fields::END_DATE)?,
            optional_text(draft, fields::TOTAL_DURATION),
            RecordStatus::Completed,
        )
    }

    fn row(&self, r: &TrainingAttendedRecord) -> TableRow {
        TableRow {
            id: r.id,
            cells: vec![
                TableCell::text(&r.course_name),
                TableCell::text(&r.training_type),
                TableCell::text(&r.faculty),
                TableCell::text(training_duration_label(
                    r.total_duration.as_deref(),
                    r.start_date,
                    r.end_date,
                )),
                TableCell::Badge {
                    badge: status_badge(r.status),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_page::{FormListPage, SubmitOutcome};
    use chrono::NaiveDate;
    use peopledesk_kernel_contracts::form::FieldIssueKind;
    use peopledesk_storage::ledger::RecordLedger;
    use peopledesk_storage::seed::seeded_training_attended_ledger;

    fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, day)
    }

    #[test]
    fn at_attended_page_01_course_only_is_rejected_without_rows() {
        let mut p = EntityFormListPage::new(TrainingAttendedSchema, RecordLedger::new());
        p.set_value(fields::COURSE_NAME, "Python Programming").unwrap();
        let out = p.submit().unwrap();
        assert_eq!(out.notice_description(), "Please fill all required fields.");
        match out {
            SubmitOutcome::Rejected { issues } => {
                let missing: Vec<_> = issues.iter().map(|i| i.field).collect();
                assert_eq!(
                    missing,
                    vec![
                        fields::TRAINING_TYPE,
                        fields::FACULTY,
                        fields::START_DATE,
                        fields::END_DATE
                    ]
                );
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(p.record_count(), 0);
        assert_eq!(p.draft().value(fields::COURSE_NAME), Some("Python Programming"));
    }

    #[test]
    fn at_attended_page_02_blank_duration_falls_back_to_day_span() {
        let mut p = EntityFormListPage::new(
            TrainingAttendedSchema,
            seeded_training_attended_ledger().unwrap(),
        );
        p.set_value(fields::COURSE_NAME, "DevOps Practices").unwrap();
        p.set_value(fields::TRAINING_TYPE, "Technical").unwrap();
        p.set_value(fields::FACULTY, "External Trainer").unwrap();
        p.set_date(fields::START_DATE, d(2024, 4, 1)).unwrap();
        p.set_date(fields::END_DATE, d(2024, 4, 4)).unwrap();
        let out = p.submit().unwrap();
        assert_eq!(
            out,
            SubmitOutcome::Appended {
                id: RecordId(3),
                message: TRAINING_RECORD_ADDED
            }
        );
        assert_eq!(
            p.rows()[2].plain(),
            "DevOps Practices | Technical | External Trainer | 3 days | Completed"
        );
        assert_eq!(
            p.rows()[0].plain(),
            "React Advanced Concepts | Technical | John Smith | 5 days | Completed"
        );
    }

    #[test]
    fn at_attended_page_03_end_before_start_is_rejected() {
        let mut p = EntityFormListPage::new(TrainingAttendedSchema, RecordLedger::new());
        p.set_value(fields::COURSE_NAME, "Database Design").unwrap();
        p.set_value(fields::TRAINING_TYPE, "Technical").unwrap();
        p.set_value(fields::FACULTY, "Jane Doe").unwrap();
        p.set_date(fields::START_DATE, d(2024, 4, 4)).unwrap();
        p.set_date(fields::END_DATE, d(2024, 4, 1)).unwrap();
        match p.submit().unwrap() {
            SubmitOutcome::Rejected { issues } => {
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].kind, FieldIssueKind::EndBeforeStart);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(p.record_count(), 0);
    }
}
