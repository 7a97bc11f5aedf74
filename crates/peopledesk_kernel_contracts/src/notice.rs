#![forbid(unsafe_code)]

use crate::MonotonicTimeNs;

pub const MISSING_FIELDS_TITLE: &str = "Error";
pub const MISSING_FIELDS_DESCRIPTION: &str = "Please fill all required fields.";
pub const SUCCESS_TITLE: &str = "Success";
pub const PROFILE_SAVED_TITLE: &str = "Profile Updated";
pub const PROFILE_SAVED_DESCRIPTION: &str = "Your profile information has been saved successfully.";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct NoticeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient, dismissible notification.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
    pub expires_at: MonotonicTimeNs,
}

impl Notice {
    pub fn is_expired(&self, now: MonotonicTimeNs) -> bool {
        now >= self.expires_at
    }
}
