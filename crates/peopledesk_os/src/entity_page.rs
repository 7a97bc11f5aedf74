#![forbid(unsafe_code)]

//! Draft + append-only list pages.
//!
//! Every record page (certifications, training, roll-on) is one
//! `EntityFormListPage` specialised by a `RecordSchema`. The schema says how a
//! validated draft becomes a record and how a record becomes a table row; the
//! page owns the draft lifecycle and the ledger.

use chrono::NaiveDate;
use peopledesk_engines::display::StatusBadge;
use peopledesk_kernel_contracts::form::{
    parse_date_input, FieldIssue, FieldIssueKind, FormDraft, FormSpec, TableSpec,
};
use peopledesk_kernel_contracts::notice::{
    NoticeKind, MISSING_FIELDS_DESCRIPTION, MISSING_FIELDS_TITLE, SUCCESS_TITLE,
};
use peopledesk_kernel_contracts::route::PageId;
use peopledesk_kernel_contracts::{ContractViolation, RecordId};
use peopledesk_storage::ledger::{LedgerRecord, RecordLedger};
use tracing::{debug, info};

use crate::PortalError;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableCell {
    Text { text: String },
    TwoLine { primary: String, secondary: String },
    Badge { badge: StatusBadge },
}

impl TableCell {
    pub fn text(text: impl Into<String>) -> Self {
        TableCell::Text { text: text.into() }
    }

    pub fn plain(&self) -> String {
        match self {
            TableCell::Text { text } => text.clone(),
            TableCell::TwoLine { primary, secondary } => format!("{primary} ({secondary})"),
            TableCell::Badge { badge } => badge.label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TableRow {
    pub id: RecordId,
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Cells joined with ` | `, badges reduced to their label.
    pub fn plain(&self) -> String {
        self.cells
            .iter()
            .map(TableCell::plain)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Appended {
        id: RecordId,
        message: &'static str,
    },
    Rejected {
        issues: Vec<FieldIssue>,
    },
}

impl SubmitOutcome {
    pub fn is_appended(&self) -> bool {
        matches!(self, SubmitOutcome::Appended { .. })
    }

    pub fn notice_kind(&self) -> NoticeKind {
        match self {
            SubmitOutcome::Appended { .. } => NoticeKind::Success,
            SubmitOutcome::Rejected { .. } => NoticeKind::Error,
        }
    }

    pub fn notice_title(&self) -> &'static str {
        match self {
            SubmitOutcome::Appended { .. } => SUCCESS_TITLE,
            SubmitOutcome::Rejected { .. } => MISSING_FIELDS_TITLE,
        }
    }

    pub fn notice_description(&self) -> &'static str {
        match self {
            SubmitOutcome::Appended { message, .. } => *message,
            SubmitOutcome::Rejected { .. } => MISSING_FIELDS_DESCRIPTION,
        }
    }
}

pub trait RecordSchema: Send {
    type Record: LedgerRecord + Send;

    fn page(&self) -> PageId;
    fn form(&self) -> &'static FormSpec;
    fn table(&self) -> &'static TableSpec;
    fn success_message(&self) -> &'static str;

    /// Called only with drafts that passed `FormSpec::check`.
    fn build(&mut self, id: RecordId, draft: &FormDraft)
        -> Result<Self::Record, ContractViolation>;

    fn row(&self, record: &Self::Record) -> TableRow;
}

/// Object-safe view of a record page so the portal can dispatch by `PageId`.
pub trait FormListPage: Send {
    fn page(&self) -> PageId;
    fn form(&self) -> &'static FormSpec;
    fn table(&self) -> &'static TableSpec;
    fn draft(&self) -> &FormDraft;
    fn set_value(&mut self, field: &str, value: &str) -> Result<(), ContractViolation>;
    fn set_date(&mut self, field: &str, date: Option<NaiveDate>) -> Result<(), ContractViolation>;
    fn set_date_input(&mut self, field: &str, raw: &str) -> Result<(), ContractViolation>;
    fn submit(&mut self) -> Result<SubmitOutcome, PortalError>;
    fn rows(&self) -> Vec<TableRow>;
    fn record_count(&self) -> usize;

    /// Swaps in a whole draft; field-level checks already ran against `form()`.
    fn replace_draft(&mut self, draft: FormDraft);

    /// Applies posted `(field, value)` pairs, then submits. Date fields take
    /// `yyyy-MM-dd`; a malformed date clears the field and rejects the submission.
    /// An unknown field fails the whole post and leaves the draft untouched.
    fn apply_entries(
        &mut self,
        entries: &[(String, String)],
    ) -> Result<SubmitOutcome, PortalError> {
        let form = self.form();
        let mut draft = self.draft().clone();
        let mut malformed = Vec::new();
        for (key, value) in entries {
            let field = form
                .field(key)
                .ok_or_else(|| ContractViolation::UnknownField { field: key.clone() })?;
            if field.kind.is_date() {
                match parse_date_input(value) {
                    Ok(date) => draft.set_date(form, key, date)?,
                    Err(_) => {
                        draft.set_date(form, key, None)?;
                        malformed.push(FieldIssue::new(field, FieldIssueKind::MalformedDate));
                    }
                }
            } else {
                draft.set_value(form, key, value.as_str())?;
            }
        }
        self.replace_draft(draft);
        if !malformed.is_empty() {
            let mut issues = form.check(self.draft());
            issues.retain(|i| !malformed.iter().any(|m| m.field == i.field));
            malformed.extend(issues);
            debug!(
                page = self.page().capability(),
                issues = malformed.len(),
                "submission rejected: malformed date"
            );
            return Ok(SubmitOutcome::Rejected { issues: malformed });
        }
        self.submit()
    }
}

pub struct EntityFormListPage<S: RecordSchema> {
    schema: S,
    draft: FormDraft,
    ledger: RecordLedger<S::Record>,
}

impl<S: RecordSchema> EntityFormListPage<S> {
    pub fn new(schema: S, ledger: RecordLedger<S::Record>) -> Self {
        Self {
            schema,
            draft: FormDraft::empty(),
            ledger,
        }
    }

    pub fn ledger(&self) -> &RecordLedger<S::Record> {
        &self.ledger
    }

    pub fn records(&self) -> &[S::Record] {
        self.ledger.rows()
    }
}

impl<S: RecordSchema> FormListPage for EntityFormListPage<S> {
    fn page(&self) -> PageId {
        self.schema.page()
    }

    fn form(&self) -> &'static FormSpec {
        self.schema.form()
    }

    fn table(&self) -> &'static TableSpec {
        self.schema.table()
    }

    fn draft(&self) -> &FormDraft {
        &self.draft
    }

    fn replace_draft(&mut self, draft: FormDraft) {
        self.draft = draft;
    }

    fn set_value(&mut self, field: &str, value: &str) -> Result<(), ContractViolation> {
        self.draft.set_value(self.schema.form(), field, value)
    }

    fn set_date(&mut self, field: &str, date: Option<NaiveDate>) -> Result<(), ContractViolation> {
        self.draft.set_date(self.schema.form(), field, date)
    }

    fn set_date_input(&mut self, field: &str, raw: &str) -> Result<(), ContractViolation> {
        let date = parse_date_input(raw)?;
        self.set_date(field, date)
    }

    fn submit(&mut self) -> Result<SubmitOutcome, PortalError> {
        let issues = self.schema.form().check(&self.draft);
        if !issues.is_empty() {
            debug!(
                page = self.schema.page().capability(),
                issues = issues.len(),
                "submission rejected"
            );
            return Ok(SubmitOutcome::Rejected { issues });
        }

        let schema = &mut self.schema;
        let draft = &self.draft;
        let id = self
            .ledger
            .append_with(|id| schema.build(id, draft))?
            .record_id();
        self.draft.clear();
        info!(
            page = self.schema.page().capability(),
            record_id = id.0,
            "record appended"
        );
        Ok(SubmitOutcome::Appended {
            id,
            message: self.schema.success_message(),
        })
    }

    fn rows(&self) -> Vec<TableRow> {
        self.ledger
            .rows()
            .iter()
            .map(|r| self.schema.row(r))
            .collect()
    }

    fn record_count(&self) -> usize {
        self.ledger.len()
    }
}

/// Trimmed value of a field the form check already required.
pub(crate) fn required_text(
    draft: &FormDraft,
    key: &'static str,
) -> Result<String, ContractViolation> {
    draft
        .value(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ContractViolation::InvalidValue {
            field: key,
            reason: "required field missing",
        })
}

pub(crate) fn optional_text(draft: &FormDraft, key: &str) -> Option<String> {
    draft
        .value(key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

pub(crate) fn required_date(
    draft: &FormDraft,
    key: &'static str,
) -> Result<NaiveDate, ContractViolation> {
    draft.date(key).ok_or(ContractViolation::InvalidValue {
        field: key,
        reason: "required date missing",
    })
}
