#![forbid(unsafe_code)]

use peopledesk_engines::display::{format_table_date, status_badge};
use peopledesk_kernel_contracts::certification::{
    fields, CertificationRecord, CERTIFICATION_FORM, CERTIFICATION_TABLE,
};
use peopledesk_kernel_contracts::form::{FormDraft, FormSpec, TableSpec};
use peopledesk_kernel_contracts::route::PageId;
use peopledesk_kernel_contracts::{ContractViolation, RecordId, RecordStatus};

use crate::entity_page::{
    required_date, required_text, EntityFormListPage, RecordSchema, TableCell, TableRow,
};

pub const CERTIFICATION_ADDED: &str = "Certification added successfully.";

#[derive(Debug, Clone, Copy, Default)]
pub struct CertificationSchema;

pub type CertificationPage = EntityFormListPage<CertificationSchema>;

impl RecordSchema for CertificationSchema {
    type Record = CertificationRecord;

    fn page(&self) -> PageId {
        PageId::Certification
    }

    fn form(&self) -> &'static FormSpec {
        &CERTIFICATION_FORM
    }

    fn table(&self) -> &'static TableSpec {
        &CERTIFICATION_TABLE
    }

    fn success_message(&self) -> &'static str {
        CERTIFICATION_ADDED
    }

    fn build(
        &mut self,
        id: RecordId,
        draft: &FormDraft,
    ) -> Result<CertificationRecord, ContractViolation> {
        CertificationRecord::v1(
            id,
            required_text(draft, fields::AUTHORITY)?,
            required_text(draft, fields::TITLE)?,
            required_text(draft, fields::TYPE)?,
            required_date(draft, fields::ACQUIRED_ON)?,
            RecordStatus::Active,
        )
    }

    fn row(&self, r: &CertificationRecord) -> TableRow {
        TableRow {
            id: r.id,
            cells: vec![
                TableCell::text(&r.authority),
                TableCell::text(&r.title),
                TableCell::text(&r.certification_type),
                TableCell::text(format_table_date(r.acquired_on)),
                TableCell::Badge {
                    badge: status_badge(r.status),
                },
            ],
        }
    }
}
