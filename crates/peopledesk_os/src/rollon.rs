#![forbid(unsafe_code)]

use peopledesk_engines::display::{format_table_date, status_badge};
use peopledesk_kernel_contracts::form::{FormDraft, FormSpec, TableSpec};
use peopledesk_kernel_contracts::rollon::{
    fields, RollOnAssignment, RollOnRecord, ROLL_ON_FORM, ROLL_ON_TABLE,
};
use peopledesk_kernel_contracts::route::PageId;
use peopledesk_kernel_contracts::{ContractViolation, RecordId, RecordStatus};

use crate::entity_page::{
    optional_text, required_date, required_text, EntityFormListPage, RecordSchema, TableCell,
    TableRow,
};

pub const EMPLOYEE_ROLLED_ON: &str = "Employee rolled on to project successfully.";

#[derive(Debug, Clone, Copy, Default)]
pub struct RollOnSchema;

pub type RollOnPage = EntityFormListPage<RollOnSchema>;

impl RecordSchema for RollOnSchema {
    type Record = RollOnRecord;

    fn page(&self) -> PageId {
        PageId::ProjectRollOn
    }

    fn form(&self) -> &'static FormSpec {
        &ROLL_ON_FORM
    }

    fn table(&self) -> &'static TableSpec {
        &ROLL_ON_TABLE
    }

    fn success_message(&self) -> &'static str {
        EMPLOYEE_ROLLED_ON
    }

    fn build(
        &mut self,
        id: RecordId,
        draft: &FormDraft,
    ) -> Result<RollOnRecord, ContractViolation> {
        RollOnRecord::v1(
            id,
            required_text(draft, fields::EMPLOYEE_NAME)?,
            required_text(draft, fields::EMPLOYEE_ID)?,
            required_text(draft, fields::PROJECT_NAME)?,
            required_text(draft, fields::CLIENT_NAME)?,
            RollOnAssignment {
                role: optional_text(draft, fields::ROLE),
                reporting_manager: optional_text(draft, fields::REPORTING_MANAGER),
                location: optional_text(draft, fields::LOCATION),
            },
            required_date(draft, fields::ROLL_ON_DATE)?,
            RecordStatus::Active,
        )
    }

    fn row(&self, r: &RollOnRecord) -> TableRow {
        TableRow {
            id: r.id,
            cells: vec![
                TableCell::TwoLine {
                    primary: r.employee_name.clone(),
                    secondary: r.employee_id.clone(),
                },
                TableCell::text(&r.project_name),
                TableCell::text(&r.client_name),
                TableCell::text(format_table_date(r.roll_on_date)),
                TableCell::Badge {
                    badge: status_badge(r.status),
                },
            ],
        }
    }
}
