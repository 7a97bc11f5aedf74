#![forbid(unsafe_code)]

use peopledesk_engines::attendees::AttendeeCountSource;
use peopledesk_engines::display::{day_count_label, status_badge};
use peopledesk_kernel_contracts::form::{
    parse_non_negative_number, FormDraft, FormSpec, TableSpec,
};
use peopledesk_kernel_contracts::route::PageId;
use peopledesk_kernel_contracts::training::{
    imparted_fields as fields, ImpartedExtras, TrainingImpartedRecord, TRAINING_IMPARTED_FORM,
    TRAINING_IMPARTED_TABLE,
};
use peopledesk_kernel_contracts::{ContractViolation, RecordId, RecordStatus};

use crate::entity_page::{
    optional_text, required_date, required_text, EntityFormListPage, RecordSchema, TableCell,
    TableRow,
};

pub const TRAINING_SESSION_SCHEDULED: &str = "Training session scheduled successfully.";

pub struct TrainingImpartedSchema {
    attendees: Box<dyn AttendeeCountSource>,
}

impl TrainingImpartedSchema {
    pub fn new(attendees: Box<dyn AttendeeCountSource>) -> Self {
        Self { attendees }
    }
}

pub type TrainingImpartedPage = EntityFormListPage<TrainingImpartedSchema>;

impl RecordSchema for TrainingImpartedSchema {
    type Record = TrainingImpartedRecord;

    fn page(&self) -> PageId {
        PageId::TrainingImparted
    }

    fn form(&self) -> &'static FormSpec {
        &TRAINING_IMPARTED_FORM
    }

    fn table(&self) -> &'static TableSpec {
        &TRAINING_IMPARTED_TABLE
    }

    fn success_message(&self) -> &'static str {
        TRAINING_SESSION_SCHEDULED
    }

    fn build(
        &mut self,
        id: RecordId,
        draft: &FormDraft,
    ) -> Result<TrainingImpartedRecord, ContractViolation> {
        TrainingImpartedRecord::v1(
            id,
            required_text(draft, fields::TRAINING_NAME)?,
            required_text(draft, fields::TRAINING_TYPE)?,
            required_date(draft, fields::START_DATE)?,
            required_date(draft, fields::END_DATE)?,
            required_text(draft, fields::TOTAL_DAYS)?,
            required_text(draft, fields::DURATION_PER_DAY)?,
            self.attendees.next_count(),
            ImpartedExtras {
                abc_education_equivalent: optional_text(draft, fields::ABC_EDUCATION_EQUIVALENT),
                cuser: optional_text(draft, fields::CUSER),
                remarks: optional_text(draft, fields::REMARKS),
            },
            RecordStatus::Scheduled,
        )
    }

    fn row(&self, r: &TrainingImpartedRecord) -> TableRow {
        // total_days is stored as entered; whole numbers read as "N days".
        let duration = match parse_non_negative_number(&r.total_days) {
            Some(n) if n.fract() == 0.0 && n <= i64::MAX as f64 => day_count_label(n as i64),
            _ => format!("{} days", r.total_days),
        };
        TableRow {
            id: r.id,
            cells: vec![
                TableCell::text(&r.training_name),
                TableCell::text(&r.training_type),
                TableCell::text(duration),
                TableCell::text(r.attendees.to_string()),
                TableCell::Badge {
                    badge: status_badge(r.status),
                },
            ],
        }
    }
}
