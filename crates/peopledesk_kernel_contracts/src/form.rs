#![forbid(unsafe_code)]

//! Form and table descriptors plus the in-progress draft they edit.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::ContractViolation;

/// Storage form for dates held in drafts and posted by date inputs.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    Number,
    Select(&'static [&'static str]),
    Date,
}

impl FieldKind {
    pub fn is_date(self) -> bool {
        matches!(self, FieldKind::Date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

impl FieldSpec {
    /// Label as shown on the form; required fields carry a trailing `*`.
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSection {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldSpec],
}

/// A pair of date fields where `end` must not precede `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: &'static str,
    pub end: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSpec {
    pub id: &'static str,
    pub submit_label: &'static str,
    pub sections: &'static [FormSection],
    pub date_ranges: &'static [DateRange],
}

impl FormSpec {
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields().find(|f| f.key == key)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields().filter(|f| f.required)
    }

    /// Collects every problem with `draft`; an empty result means the draft is submittable.
    pub fn check(&self, draft: &FormDraft) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        for field in self.fields() {
            if field.kind.is_date() {
                if field.required && draft.date(field.key).is_none() {
                    issues.push(FieldIssue::new(field, FieldIssueKind::Missing));
                }
                continue;
            }
            let value = draft.value(field.key).unwrap_or("");
            if value.trim().is_empty() {
                if field.required {
                    issues.push(FieldIssue::new(field, FieldIssueKind::Missing));
                }
                continue;
            }
            match field.kind {
                FieldKind::Select(options) if !options.contains(&value) => {
                    issues.push(FieldIssue::new(field, FieldIssueKind::UnknownOption));
                }
                FieldKind::Number if parse_non_negative_number(value).is_none() => {
                    issues.push(FieldIssue::new(field, FieldIssueKind::NotANumber));
                }
                FieldKind::Email if !looks_like_email(value) => {
                    issues.push(FieldIssue::new(field, FieldIssueKind::NotAnEmail));
                }
                _ => {}
            }
        }
        for range in self.date_ranges {
            if let (Some(start), Some(end)) = (draft.date(range.start), draft.date(range.end)) {
                if end < start {
                    if let Some(field) = self.field(range.end) {
                        issues.push(FieldIssue::new(field, FieldIssueKind::EndBeforeStart));
                    }
                }
            }
        }
        issues
    }
}

pub fn parse_non_negative_number(value: &str) -> Option<f64> {
    let n: f64 = value.trim().parse().ok()?;
    if n.is_finite() && n >= 0.0 {
        Some(n)
    } else {
        None
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FieldIssueKind {
    Missing,
    UnknownOption,
    NotANumber,
    NotAnEmail,
    EndBeforeStart,
    MalformedDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: FieldIssueKind,
}

impl FieldIssue {
    pub fn new(field: &FieldSpec, kind: FieldIssueKind) -> Self {
        Self {
            field: field.key,
            label: field.label,
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub columns: &'static [&'static str],
}

/// Field values of a form being edited. Dates live apart from text values.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct FormDraft {
    values: BTreeMap<String, String>,
    dates: BTreeMap<String, NaiveDate>,
}

impl FormDraft {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.dates.is_empty()
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        self.dates.get(key).copied()
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn dates(&self) -> &BTreeMap<String, NaiveDate> {
        &self.dates
    }

    /// Sets a non-date field. An empty value clears the field.
    pub fn set_value(
        &mut self,
        spec: &FormSpec,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), ContractViolation> {
        let field = spec.field(key).ok_or_else(|| ContractViolation::UnknownField {
            field: key.to_string(),
        })?;
        if field.kind.is_date() {
            return Err(ContractViolation::InvalidValue {
                field: "form_draft.value",
                reason: "date fields are set through set_date",
            });
        }
        let value = value.into();
        if value.is_empty() {
            self.values.remove(field.key);
        } else {
            self.values.insert(field.key.to_string(), value);
        }
        Ok(())
    }

    pub fn set_date(
        &mut self,
        spec: &FormSpec,
        key: &str,
        date: Option<NaiveDate>,
    ) -> Result<(), ContractViolation> {
        let field = spec.field(key).ok_or_else(|| ContractViolation::UnknownField {
            field: key.to_string(),
        })?;
        if !field.kind.is_date() {
            return Err(ContractViolation::InvalidValue {
                field: "form_draft.date",
                reason: "field is not a date field",
            });
        }
        match date {
            Some(d) => {
                self.dates.insert(field.key.to_string(), d);
            }
            None => {
                self.dates.remove(field.key);
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.dates.clear();
    }
}

/// Parses a `yyyy-MM-dd` date input. Blank input means "no date".
pub fn parse_date_input(raw: &str) -> Result<Option<NaiveDate>, ContractViolation> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT)
        .map(Some)
        .map_err(|_| ContractViolation::InvalidValue {
            field: "form_draft.date",
            reason: "must be formatted as yyyy-MM-dd",
        })
}
