#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use peopledesk_engines::attendees::AttendeeSourceSpec;
use peopledesk_engines::nav_view::NavEntryView;
use peopledesk_kernel_contracts::nav::default_menu;
use peopledesk_kernel_contracts::notice::{
    Notice, NoticeId, NoticeKind, PROFILE_SAVED_TITLE,
};
use peopledesk_kernel_contracts::route::{PageAvailability, PageId};
use peopledesk_kernel_contracts::session::EmployeeName;
use peopledesk_kernel_contracts::MonotonicTimeNs;
use peopledesk_storage::seed;
use tracing::info;

use crate::certification::{CertificationPage, CertificationSchema};
use crate::dashboard::{dashboard_view, DashboardView};
use crate::entity_page::{EntityFormListPage, FormListPage, SubmitOutcome};
use crate::navigation::NavigationShell;
use crate::notice::{NoticeBoard, DEFAULT_NOTICE_TTL_MS};
use crate::profile::ProfilePage;
use crate::profile_menu::{self, MenuOutcome, ProfileIdentity, ProfileMenuAction};
use crate::rollon::{RollOnPage, RollOnSchema};
use crate::session::SessionContext;
use crate::training_attended::{TrainingAttendedPage, TrainingAttendedSchema};
use crate::training_imparted::{TrainingImpartedPage, TrainingImpartedSchema};
use crate::PortalError;

pub const FORM_PAGES: [PageId; 4] = [
    PageId::Certification,
    PageId::TrainingAttended,
    PageId::TrainingImparted,
    PageId::ProjectRollOn,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub employee_name: Option<EmployeeName>,
    pub attendee_source: AttendeeSourceSpec,
    pub notice_ttl_ms: u64,
}

impl PortalConfig {
    pub fn mvp_v1() -> Self {
        Self {
            employee_name: None,
            attendee_source: AttendeeSourceSpec::Random,
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub outcome: SubmitOutcome,
    pub notice: NoticeId,
}

/// All portal state for the single active user.
pub struct PortalRuntime {
    session: SessionContext,
    navigation: NavigationShell,
    profile: ProfilePage,
    notices: NoticeBoard,
    certification: CertificationPage,
    training_attended: TrainingAttendedPage,
    training_imparted: TrainingImpartedPage,
    roll_on: RollOnPage,
}

impl PortalRuntime {
    pub fn new(config: PortalConfig) -> Result<Self, PortalError> {
        let session = match config.employee_name {
            Some(name) => SessionContext::signed_in(name),
            None => SessionContext::signed_out(),
        };
        Ok(Self {
            session,
            navigation: NavigationShell::new(default_menu())?,
            profile: ProfilePage::seeded()?,
            notices: NoticeBoard::new(config.notice_ttl_ms),
            certification: EntityFormListPage::new(
                CertificationSchema,
                seed::seeded_certification_ledger()?,
            ),
            training_attended: EntityFormListPage::new(
                TrainingAttendedSchema,
                seed::seeded_training_attended_ledger()?,
            ),
            training_imparted: EntityFormListPage::new(
                TrainingImpartedSchema::new(config.attendee_source.build()),
                seed::seeded_training_imparted_ledger()?,
            ),
            roll_on: EntityFormListPage::new(RollOnSchema, seed::seeded_roll_on_ledger()?),
        })
    }

    /// Maps a request path to a servable page. Stubs and unknown paths are errors.
    pub fn resolve(&self, path: &str) -> Result<PageId, PortalError> {
        let page = PageId::from_path(path).ok_or_else(|| PortalError::NotFound {
            path: path.to_string(),
        })?;
        match page.availability() {
            PageAvailability::Implemented | PageAvailability::ComingSoon => Ok(page),
            PageAvailability::NotImplemented => Err(PortalError::NotImplemented {
                capability: page.capability(),
            }),
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn navigation(&self) -> &NavigationShell {
        &self.navigation
    }

    pub fn profile(&self) -> &ProfilePage {
        &self.profile
    }

    pub fn identity(&self) -> ProfileIdentity {
        profile_menu::identity(&self.session)
    }

    pub fn dashboard(&self) -> DashboardView {
        dashboard_view(&self.session)
    }

    pub fn nav_view(&self, current_path: &str) -> Vec<NavEntryView> {
        self.navigation.view(current_path)
    }

    pub fn form_page(&self, page: PageId) -> Option<&dyn FormListPage> {
        match page {
            PageId::Certification => Some(&self.certification),
            PageId::TrainingAttended => Some(&self.training_attended),
            PageId::TrainingImparted => Some(&self.training_imparted),
            PageId::ProjectRollOn => Some(&self.roll_on),
            _ => None,
        }
    }

    pub fn form_page_mut(&mut self, page: PageId) -> Option<&mut dyn FormListPage> {
        match page {
            PageId::Certification => Some(&mut self.certification),
            PageId::TrainingAttended => Some(&mut self.training_attended),
            PageId::TrainingImparted => Some(&mut self.training_imparted),
            PageId::ProjectRollOn => Some(&mut self.roll_on),
            _ => None,
        }
    }

    /// Applies a posted form to a record page, submits it and posts the outcome notice.
    pub fn apply_form_post(
        &mut self,
        page: PageId,
        entries: &[(String, String)],
        now: MonotonicTimeNs,
    ) -> Result<SubmitReport, PortalError> {
        let target = self
            .form_page_mut(page)
            .ok_or_else(|| PortalError::NotFound {
                path: page.path().to_string(),
            })?;
        let outcome = target.apply_entries(entries)?;
        let notice = self.notices.post(
            outcome.notice_kind(),
            outcome.notice_title(),
            outcome.notice_description(),
            now,
        );
        Ok(SubmitReport { outcome, notice })
    }

    /// JSON variant of `apply_form_post`: text values and `yyyy-MM-dd` dates in separate maps.
    pub fn submit_values(
        &mut self,
        page: PageId,
        values: &BTreeMap<String, String>,
        dates: &BTreeMap<String, String>,
        now: MonotonicTimeNs,
    ) -> Result<SubmitReport, PortalError> {
        let entries: Vec<(String, String)> = values
            .iter()
            .chain(dates.iter())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        self.apply_form_post(page, &entries, now)
    }

    pub fn edit_profile(&mut self) -> Result<(), PortalError> {
        self.profile.edit()
    }

    pub fn save_profile(
        &mut self,
        entries: &[(String, String)],
        now: MonotonicTimeNs,
    ) -> Result<NoticeId, PortalError> {
        if !entries.is_empty() {
            self.profile.apply_entries(entries)?;
        }
        let description = self.profile.save()?;
        Ok(self
            .notices
            .post(NoticeKind::Success, PROFILE_SAVED_TITLE, description, now))
    }

    pub fn toggle_group(&mut self, title: &str) -> Result<bool, PortalError> {
        Ok(self.navigation.toggle_group(title)?)
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.navigation.toggle_sidebar()
    }

    pub fn select_menu(&mut self, action: ProfileMenuAction) -> Result<MenuOutcome, PortalError> {
        profile_menu::select(action, &mut self.session)
    }

    pub fn login(&mut self, name: &str) -> Result<(), PortalError> {
        Ok(self.session.login(name)?)
    }

    pub fn active_notices(&mut self, now: MonotonicTimeNs) -> Vec<Notice> {
        self.notices.active(now).to_vec()
    }

    pub fn dismiss_notice(&mut self, id: NoticeId) -> bool {
        let dismissed = self.notices.dismiss(id);
        if dismissed {
            info!(notice_id = id.0, "notice dismissed");
        }
        dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peopledesk_kernel_contracts::training::attended_fields;

    fn portal() -> PortalRuntime {
        let mut config = PortalConfig::mvp_v1();
        config.employee_name = Some(EmployeeName::new("Shruthi").unwrap());
        config.attendee_source = AttendeeSourceSpec::Fixed(11);
        PortalRuntime::new(config).unwrap()
    }

    fn entries(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn at_portal_01_route_resolution() {
        let p = portal();
        assert_eq!(p.resolve("/"), Ok(PageId::Dashboard));
        assert_eq!(p.resolve("/registration"), Ok(PageId::Registration));
        assert_eq!(
            p.resolve("/admin/settings"),
            Err(PortalError::NotImplemented {
                capability: "admin_settings"
            })
        );
        assert_eq!(
            p.resolve("/payroll"),
            Err(PortalError::NotFound {
                path: "/payroll".to_string()
            })
        );
    }

    #[test]
    fn at_portal_02_certification_post_appends_and_notifies() {
        let mut p = portal();
        let report = p
            .apply_form_post(
                PageId::Certification,
                &entries(&[
                    ("certification_authority", "AWS"),
                    ("certification_title", "Cloud Practitioner"),
                    ("certification_type", "Cloud"),
                    ("certification_date", "2024-06-01"),
                ]),
                MonotonicTimeNs(0),
            )
            .unwrap();
        assert!(report.outcome.is_appended());
        let page = p.form_page(PageId::Certification).unwrap();
        assert_eq!(
            page.rows().last().unwrap().plain(),
            "AWS | Cloud Practitioner | Cloud | Jun 01, 2024 | Active"
        );
        let notices = p.active_notices(MonotonicTimeNs(0));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert_eq!(notices[0].description, "Certification added successfully.");
    }

    #[test]
    fn at_portal_03_attended_course_only_posts_error_notice() {
        let mut p = portal();
        let before = p.form_page(PageId::TrainingAttended).unwrap().record_count();
        let report = p
            .apply_form_post(
                PageId::TrainingAttended,
                &entries(&[(attended_fields::COURSE_NAME, "Node.js Development")]),
                MonotonicTimeNs(0),
            )
            .unwrap();
        assert!(!report.outcome.is_appended());
        let page = p.form_page(PageId::TrainingAttended).unwrap();
        assert_eq!(page.record_count(), before);
        assert_eq!(
            page.draft().value(attended_fields::COURSE_NAME),
            Some("Node.js Development")
        );
        let notices = p.active_notices(MonotonicTimeNs(0));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert_eq!(notices[0].description, "Please fill all required fields.");
    }

    #[test]
    fn at_portal_04_json_submit_uses_injected_attendees() {
        let mut p = portal();
        let values: BTreeMap<String, String> = [
            ("training_type", "Compliance"),
            ("training_name", "Secure Coding"),
            ("total_days", "1"),
            ("duration_per_day", "3"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let dates: BTreeMap<String, String> = [("start_date", "2024-10-01"), ("end_date", "2024-10-01")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let report = p
            .submit_values(PageId::TrainingImparted, &values, &dates, MonotonicTimeNs(0))
            .unwrap();
        assert!(report.outcome.is_appended());
        let page = p.form_page(PageId::TrainingImparted).unwrap();
        assert_eq!(
            page.rows().last().unwrap().plain(),
            "Secure Coding | Compliance | 1 day | 11 | Scheduled"
        );
    }

    #[test]
    fn at_portal_05_non_form_page_post_is_not_found() {
        let mut p = portal();
        assert!(matches!(
            p.apply_form_post(PageId::Dashboard, &[], MonotonicTimeNs(0)),
            Err(PortalError::NotFound { .. })
        ));
    }

    #[test]
    fn at_portal_06_profile_save_requires_edit() {
        let mut p = portal();
        assert!(matches!(
            p.save_profile(&[], MonotonicTimeNs(0)),
            Err(PortalError::InvalidTransition { .. })
        ));
        p.edit_profile().unwrap();
        p.save_profile(&entries(&[("grade", "L4")]), MonotonicTimeNs(0))
            .unwrap();
        assert_eq!(p.profile().values().value("grade"), Some("L4"));
        let notices = p.active_notices(MonotonicTimeNs(0));
        assert_eq!(notices[0].title, "Profile Updated");
    }

    #[test]
    fn at_portal_07_logout_then_login_changes_identity() {
        let mut p = portal();
        assert_eq!(p.identity().initials, "S");
        assert_eq!(
            p.select_menu(ProfileMenuAction::Logout).unwrap(),
            MenuOutcome::SignedOut
        );
        assert!(!p.identity().signed_in);
        p.login("Jane Smith").unwrap();
        assert_eq!(p.identity().initials, "JS");
        assert!(p.dashboard().greeting.starts_with("Welcome back, Jane Smith!"));
    }

    #[test]
    fn at_portal_08_notices_expire_and_dismiss() {
        let mut p = portal();
        p.edit_profile().unwrap();
        let id = p.save_profile(&[], MonotonicTimeNs(0)).unwrap();
        assert!(p.dismiss_notice(id));
        assert!(p.active_notices(MonotonicTimeNs(0)).is_empty());
        p.edit_profile().unwrap();
        p.save_profile(&[], MonotonicTimeNs(0)).unwrap();
        assert!(p
            .active_notices(MonotonicTimeNs(DEFAULT_NOTICE_TTL_MS * 1_000_000))
            .is_empty());
    }

    #[test]
    fn at_portal_09_every_form_page_is_reachable() {
        let p = portal();
        for page in FORM_PAGES {
            assert_eq!(p.resolve(page.path()), Ok(page));
            assert_eq!(p.form_page(page).unwrap().page(), page);
        }
    }
}
