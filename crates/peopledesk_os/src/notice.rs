#![forbid(unsafe_code)]

use peopledesk_kernel_contracts::notice::{Notice, NoticeId, NoticeKind};
use peopledesk_kernel_contracts::MonotonicTimeNs;

pub const DEFAULT_NOTICE_TTL_MS: u64 = 5_000;

/// Transient notifications. Expired notices are dropped on every post and read.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    ttl_ms: u64,
    next_notice_id: u64,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            ttl_ms,
            next_notice_id: 1,
            notices: Vec::new(),
        }
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    pub fn post(
        &mut self,
        kind: NoticeKind,
        title: impl Into<String>,
        description: impl Into<String>,
        now: MonotonicTimeNs,
    ) -> NoticeId {
        self.notices.retain(|n| !n.is_expired(now));
        let id = NoticeId(self.next_notice_id);
        self.next_notice_id = self.next_notice_id.saturating_add(1);
        self.notices.push(Notice {
            id,
            kind,
            title: title.into(),
            description: description.into(),
            expires_at: now.saturating_add_ms(self.ttl_ms),
        });
        id
    }

    /// Notices held right now, expired ones included until the next post or read.
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Prunes expired notices and returns the rest in posting order.
    pub fn active(&mut self, now: MonotonicTimeNs) -> &[Notice] {
        self.notices.retain(|n| !n.is_expired(now));
        &self.notices
    }

    /// Returns false when the notice was already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: u64 = 1_000_000;

    #[test]
    fn at_notice_01_notices_expire_after_ttl() {
        let mut board = NoticeBoard::new(1_000);
        board.post(NoticeKind::Success, "Success", "a", MonotonicTimeNs(0));
        board.post(NoticeKind::Error, "Error", "b", MonotonicTimeNs(500 * MS));
        assert_eq!(board.active(MonotonicTimeNs(999 * MS)).len(), 2);
        let left = board.active(MonotonicTimeNs(1_000 * MS));
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].description, "b");
        assert!(board.active(MonotonicTimeNs(1_500 * MS)).is_empty());
    }

    #[test]
    fn at_notice_02_dismiss_removes_only_target() {
        let mut board = NoticeBoard::default();
        let a = board.post(NoticeKind::Success, "Success", "a", MonotonicTimeNs(0));
        let b = board.post(NoticeKind::Success, "Success", "b", MonotonicTimeNs(0));
        assert!(board.dismiss(a));
        assert!(!board.dismiss(a));
        let left = board.active(MonotonicTimeNs(0));
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, b);
    }

    #[test]
    fn at_notice_03_ids_are_monotonic() {
        let mut board = NoticeBoard::default();
        let a = board.post(NoticeKind::Error, "Error", "x", MonotonicTimeNs(0));
        board.dismiss(a);
        let b = board.post(NoticeKind::Error, "Error", "y", MonotonicTimeNs(0));
        assert!(b > a);
    }

    #[test]
    fn at_notice_04_post_drops_expired_notices() {
        let mut board = NoticeBoard::new(5_000);
        for i in 0..100u64 {
            board.post(
                NoticeKind::Error,
                "Error",
                "rejected",
                MonotonicTimeNs(i * 1_000_000 * MS),
            );
        }
        assert_eq!(board.len(), 1);

        board.post(NoticeKind::Success, "Success", "fresh", MonotonicTimeNs(100_000_000 * MS));
        assert_eq!(board.len(), 1);
        assert_eq!(board.active(MonotonicTimeNs(100_000_000 * MS))[0].description, "fresh");
    }
}
