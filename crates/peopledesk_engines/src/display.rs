#![forbid(unsafe_code)]

//! Display formatting shared by every page: dates, initials, status badges.

use chrono::{Datelike, NaiveDate};
use peopledesk_kernel_contracts::RecordStatus;

pub const TABLE_DATE_FORMAT: &str = "%b %d, %Y";
pub const COMPACT_DATE_FORMAT: &str = "%b %d";

/// `Jun 01, 2024`
pub fn format_table_date(date: NaiveDate) -> String {
    date.format(TABLE_DATE_FORMAT).to_string()
}

/// `Jun 01`, used by the narrow start/end pickers on training forms.
pub fn format_compact_date(date: NaiveDate) -> String {
    date.format(COMPACT_DATE_FORMAT).to_string()
}

/// Long picker form: `June 1st, 2024`.
pub fn format_picker_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// First character of each whitespace-separated token, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Positive,
    Attention,
}

impl BadgeTone {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeTone::Positive => "positive",
            BadgeTone::Attention => "attention",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

pub fn status_badge(status: RecordStatus) -> StatusBadge {
    let tone = match status {
        RecordStatus::Active | RecordStatus::Completed => BadgeTone::Positive,
        RecordStatus::Expired | RecordStatus::Scheduled => BadgeTone::Attention,
    };
    StatusBadge {
        label: status.as_str(),
        tone,
    }
}

/// Entered duration when present, otherwise the day span between the dates.
pub fn training_duration_label(
    total_duration: Option<&str>,
    start: NaiveDate,
    end: NaiveDate,
) -> String {
    if let Some(d) = total_duration.map(str::trim).filter(|d| !d.is_empty()) {
        return d.to_string();
    }
    day_count_label((end - start).num_days().max(1))
}

pub fn day_count_label(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn at_display_01_table_and_compact_formats() {
        assert_eq!(format_table_date(d(2024, 6, 1)), "Jun 01, 2024");
        assert_eq!(format_compact_date(d(2023, 12, 10)), "Dec 10");
    }

    #[test]
    fn at_display_02_picker_format_uses_ordinals() {
        assert_eq!(format_picker_date(d(2024, 6, 1)), "June 1st, 2024");
        assert_eq!(format_picker_date(d(2024, 6, 2)), "June 2nd, 2024");
        assert_eq!(format_picker_date(d(2024, 6, 3)), "June 3rd, 2024");
        assert_eq!(format_picker_date(d(2024, 6, 11)), "June 11th, 2024");
        assert_eq!(format_picker_date(d(2024, 6, 12)), "June 12th, 2024");
        assert_eq!(format_picker_date(d(2024, 6, 22)), "June 22nd, 2024");
        assert_eq!(format_picker_date(d(2024, 3, 31)), "March 31st, 2024");
    }

    #[test]
    fn at_display_03_initials() {
        assert_eq!(initials("Shruthi"), "S");
        assert_eq!(initials("Jane Smith"), "JS");
        assert_eq!(initials("  jane   de  smith "), "JDS");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn at_display_04_badges_have_two_tones() {
        assert_eq!(status_badge(RecordStatus::Active).tone, BadgeTone::Positive);
        assert_eq!(status_badge(RecordStatus::Completed).tone, BadgeTone::Positive);
        assert_eq!(status_badge(RecordStatus::Expired).tone, BadgeTone::Attention);
        assert_eq!(status_badge(RecordStatus::Scheduled).tone, BadgeTone::Attention);
        assert_eq!(status_badge(RecordStatus::Expired).label, "Expired");
    }

    #[test]
    fn at_display_05_duration_falls_back_to_day_span() {
        let (s, e) = (d(2024, 1, 15), d(2024, 1, 20));
        assert_eq!(training_duration_label(Some("40 hours"), s, e), "40 hours");
        assert_eq!(training_duration_label(Some("  "), s, e), "5 days");
        assert_eq!(training_duration_label(None, s, e), "5 days");
        assert_eq!(training_duration_label(None, s, s), "1 day");
    }
}
