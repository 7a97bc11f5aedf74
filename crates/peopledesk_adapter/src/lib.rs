#![forbid(unsafe_code)]

pub mod render;

use std::{
    collections::BTreeMap,
    env,
    net::SocketAddr,
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use peopledesk_engines::attendees::AttendeeSourceSpec;
use peopledesk_engines::nav_view::NavEntryView;
use peopledesk_kernel_contracts::form::{FieldIssue, FormDraft};
use peopledesk_kernel_contracts::notice::{Notice, NoticeId};
use peopledesk_kernel_contracts::route::PageId;
use peopledesk_kernel_contracts::session::EmployeeName;
use peopledesk_kernel_contracts::{ContractViolation, MonotonicTimeNs, RecordId};
use peopledesk_os::entity_page::{SubmitOutcome, TableRow};
use peopledesk_os::notice::DEFAULT_NOTICE_TTL_MS;
use peopledesk_os::portal::{PortalConfig, PortalRuntime};
use peopledesk_os::profile_menu::{MenuOutcome, ProfileMenuAction};
use peopledesk_os::PortalError;
use peopledesk_storage::ledger::StorageError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use render::Chrome;

pub const BIND_ENV: &str = "PEOPLEDESK_HTTP_BIND";
pub const EMPLOYEE_NAME_ENV: &str = "PEOPLEDESK_EMPLOYEE_NAME";
pub const ATTENDEE_SOURCE_ENV: &str = "PEOPLEDESK_ATTENDEE_SOURCE";
pub const NOTICE_TTL_ENV: &str = "PEOPLEDESK_NOTICE_TTL_MS";
pub const LOG_JSON_ENV: &str = "PEOPLEDESK_LOG_JSON";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

const LOCK_POISONED: &str = "adapter runtime lock poisoned";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdapterConfigError {
    #[error("{key}: `{value}` is not a socket address")]
    InvalidBind { key: &'static str, value: String },
    #[error("{key}: {source}")]
    InvalidValue {
        key: &'static str,
        #[source]
        source: ContractViolation,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdapterConfig {
    pub bind: SocketAddr,
    pub portal: PortalConfig,
    pub log_json: bool,
}

impl AdapterConfig {
    pub fn from_env() -> Result<Self, AdapterConfigError> {
        Self::from_env_var_map(|key| env::var(key).ok())
    }

    pub fn from_env_var_map<F>(mut env_getter: F) -> Result<Self, AdapterConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let bind_raw = env_getter(BIND_ENV).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| AdapterConfigError::InvalidBind {
                key: BIND_ENV,
                value: bind_raw.clone(),
            })?;

        // A blank name is the same as no name: start signed out.
        let employee_name = match env_getter(EMPLOYEE_NAME_ENV) {
            Some(raw) if !raw.trim().is_empty() => {
                Some(EmployeeName::new(raw).map_err(|source| {
                    AdapterConfigError::InvalidValue {
                        key: EMPLOYEE_NAME_ENV,
                        source,
                    }
                })?)
            }
            _ => None,
        };

        let attendee_source = match env_getter(ATTENDEE_SOURCE_ENV) {
            Some(raw) => AttendeeSourceSpec::parse(&raw).map_err(|source| {
                AdapterConfigError::InvalidValue {
                    key: ATTENDEE_SOURCE_ENV,
                    source,
                }
            })?,
            None => AttendeeSourceSpec::Random,
        };

        let notice_ttl_ms = env_getter(NOTICE_TTL_ENV)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| (500..=60_000).contains(v))
            .unwrap_or(DEFAULT_NOTICE_TTL_MS);

        let log_json = match env_getter(LOG_JSON_ENV) {
            Some(v) => matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "on" | "yes"
            ),
            None => false,
        };

        Ok(Self {
            bind,
            portal: PortalConfig {
                employee_name,
                attendee_source,
                notice_ttl_ms,
            },
            log_json,
        })
    }
}

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("adapter runtime lock poisoned")]
    LockPoisoned,
    #[error("unknown record page `{slug}`")]
    UnknownPageSlug { slug: String },
    #[error(transparent)]
    Portal(#[from] PortalError),
}

impl AdapterError {
    pub fn status(&self) -> StatusCode {
        match self {
            AdapterError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
            AdapterError::UnknownPageSlug { .. } => StatusCode::NOT_FOUND,
            AdapterError::Portal(err) => portal_error_status(err),
        }
    }
}

pub fn portal_error_status(err: &PortalError) -> StatusCode {
    match err {
        PortalError::NotFound { .. } => StatusCode::NOT_FOUND,
        PortalError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
        PortalError::InvalidTransition { .. } => StatusCode::CONFLICT,
        PortalError::Contract(_) => StatusCode::BAD_REQUEST,
        PortalError::Storage(StorageError::ContractViolation(_)) => StatusCode::BAD_REQUEST,
        PortalError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Portal plus the clock that stamps notices.
pub struct AdapterRuntime {
    portal: PortalRuntime,
    started: Instant,
}

impl AdapterRuntime {
    pub fn new(config: &AdapterConfig) -> Result<Self, PortalError> {
        Ok(Self {
            portal: PortalRuntime::new(config.portal.clone())?,
            started: Instant::now(),
        })
    }

    pub fn now(&self) -> MonotonicTimeNs {
        MonotonicTimeNs(u64::try_from(self.started.elapsed().as_nanos()).unwrap_or(u64::MAX))
    }

    pub fn portal(&self) -> &PortalRuntime {
        &self.portal
    }

    pub fn portal_mut(&mut self) -> &mut PortalRuntime {
        &mut self.portal
    }

    pub fn render_path(&mut self, path: &str) -> (StatusCode, String) {
        let page = match self.portal.resolve(path) {
            Ok(page) => page,
            Err(err) => return self.render_error(path, &AdapterError::Portal(err)),
        };
        let body = match page {
            PageId::Dashboard => render::dashboard_body(&self.portal.dashboard()),
            PageId::Profile => render::profile_body(self.portal.profile()),
            PageId::Registration => render::registration_body(),
            other => match self.portal.form_page(other) {
                Some(form_page) => render::form_page_body(form_page),
                None => {
                    let err = PortalError::NotFound {
                        path: path.to_string(),
                    };
                    return self.render_error(path, &AdapterError::Portal(err));
                }
            },
        };
        (StatusCode::OK, self.wrap(path, page.title(), &body))
    }

    pub fn render_error(&mut self, path: &str, err: &AdapterError) -> (StatusCode, String) {
        let status = err.status();
        if status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED {
            warn!(path, error = %err, "request failed");
        } else {
            debug!(path, error = %err, "request rejected");
        }
        let title = status.canonical_reason().unwrap_or("Error");
        let body = render::error_body(status.as_u16(), &err.to_string());
        (status, self.wrap(path, title, &body))
    }

    fn wrap(&mut self, path: &str, title: &str, body: &str) -> String {
        let now = self.now();
        let notices = self.portal.active_notices(now);
        let nav = self.portal.nav_view(path);
        let identity = self.portal.identity();
        render::layout(
            &Chrome {
                current_path: path,
                nav: &nav,
                rail_collapsed: self.portal.navigation().is_rail_collapsed(),
                identity: &identity,
                notices: &notices,
            },
            title,
            body,
        )
    }
}

pub type SharedRuntime = Arc<Mutex<AdapterRuntime>>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub signed_in: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorResponse {
    pub status: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitRequest {
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    /// `yyyy-MM-dd` per date field.
    #[serde(default)]
    pub dates: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubmitResponse {
    pub outcome: &'static str,
    pub id: Option<RecordId>,
    pub notice_id: NoticeId,
    pub message: &'static str,
    pub issues: Vec<FieldIssue>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecordsResponse {
    pub page: &'static str,
    pub title: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<TableRow>,
    pub draft: FormDraft,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavQuery {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReturnToForm {
    pub return_to: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleGroupForm {
    pub group: String,
    pub return_to: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub name: String,
}

/// Redirect targets are limited to known route paths.
pub fn safe_return_to(raw: Option<&str>) -> &str {
    match raw {
        Some(path) if PageId::from_path(path).is_some() => path,
        _ => "/",
    }
}

pub fn build_router(runtime: SharedRuntime) -> Router {
    let mut router: Router<SharedRuntime> = Router::new();
    for page in PageId::ALL {
        let method_router = if page.api_slug().is_some() {
            get(show_page).post(submit_page_form)
        } else {
            get(show_page)
        };
        router = router.route(page.path(), method_router);
    }
    router
        .route("/healthz", get(healthz))
        .route("/profile/edit", post(profile_edit))
        .route("/profile/save", post(profile_save))
        .route("/nav/toggle", post(nav_toggle))
        .route("/nav/sidebar", post(nav_sidebar))
        .route("/menu/profile", post(menu_profile))
        .route("/menu/settings", post(menu_settings))
        .route("/menu/logout", post(menu_logout))
        .route("/session/login", post(session_login))
        .route("/notices/:id/dismiss", post(notice_dismiss))
        .route("/api/nav", get(api_nav))
        .route("/api/pages/:page/records", get(api_records))
        .route("/api/pages/:page/submit", post(api_submit))
        .route("/api/notices", get(api_notices))
        .fallback(show_page)
        .with_state(runtime)
}

fn lock(runtime: &SharedRuntime) -> Result<MutexGuard<'_, AdapterRuntime>, AdapterError> {
    runtime.lock().map_err(|_| AdapterError::LockPoisoned)
}

fn lock_poisoned_html() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(render::error_body(500, LOCK_POISONED)),
    )
        .into_response()
}

/// Runs a state change and redirects; failures render in the layout of `error_path`.
fn html_action<F>(runtime: &SharedRuntime, error_path: &str, action: F) -> Response
where
    F: FnOnce(&mut AdapterRuntime) -> Result<String, AdapterError>,
{
    let mut guard = match lock(runtime) {
        Ok(guard) => guard,
        Err(_) => return lock_poisoned_html(),
    };
    match action(&mut *guard) {
        Ok(target) => Redirect::to(&target).into_response(),
        Err(err) => {
            let (status, body) = guard.render_error(error_path, &err);
            (status, Html(body)).into_response()
        }
    }
}

fn json_result<T: Serialize>(result: Result<T, AdapterError>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(err) => (
            err.status(),
            Json(ApiErrorResponse {
                status: "error".to_string(),
                reason: err.to_string(),
            }),
        )
            .into_response(),
    }
}

async fn healthz(State(runtime): State<SharedRuntime>) -> Response {
    json_result(lock(&runtime).map(|rt| HealthResponse {
        status: "ok".to_string(),
        signed_in: rt.portal().session().is_signed_in(),
    }))
}

async fn show_page(State(runtime): State<SharedRuntime>, uri: Uri) -> Response {
    let mut guard = match lock(&runtime) {
        Ok(guard) => guard,
        Err(_) => return lock_poisoned_html(),
    };
    let (status, body) = guard.render_path(uri.path());
    (status, Html(body)).into_response()
}

async fn submit_page_form(
    State(runtime): State<SharedRuntime>,
    uri: Uri,
    Form(entries): Form<Vec<(String, String)>>,
) -> Response {
    let path = uri.path().to_string();
    html_action(&runtime, &path, |rt| {
        let page = rt.portal().resolve(&path)?;
        let now = rt.now();
        rt.portal_mut().apply_form_post(page, &entries, now)?;
        Ok(page.path().to_string())
    })
}

async fn profile_edit(State(runtime): State<SharedRuntime>) -> Response {
    let target = PageId::Profile.path();
    html_action(&runtime, target, |rt| {
        rt.portal_mut().edit_profile()?;
        Ok(target.to_string())
    })
}

async fn profile_save(
    State(runtime): State<SharedRuntime>,
    Form(entries): Form<Vec<(String, String)>>,
) -> Response {
    let target = PageId::Profile.path();
    html_action(&runtime, target, |rt| {
        let now = rt.now();
        rt.portal_mut().save_profile(&entries, now)?;
        Ok(target.to_string())
    })
}

async fn nav_toggle(
    State(runtime): State<SharedRuntime>,
    Form(form): Form<ToggleGroupForm>,
) -> Response {
    let target = safe_return_to(form.return_to.as_deref()).to_string();
    html_action(&runtime, &target, |rt| {
        rt.portal_mut().toggle_group(&form.group)?;
        Ok(target.clone())
    })
}

async fn nav_sidebar(
    State(runtime): State<SharedRuntime>,
    Form(form): Form<ReturnToForm>,
) -> Response {
    let target = safe_return_to(form.return_to.as_deref()).to_string();
    html_action(&runtime, &target, |rt| {
        rt.portal_mut().toggle_sidebar();
        Ok(target.clone())
    })
}

fn menu_action(runtime: &SharedRuntime, action: ProfileMenuAction) -> Response {
    html_action(runtime, PageId::Dashboard.path(), |rt| {
        let target = match rt.portal_mut().select_menu(action)? {
            MenuOutcome::Navigate(page) => page.path(),
            MenuOutcome::SignedOut => PageId::Dashboard.path(),
        };
        Ok(target.to_string())
    })
}

async fn menu_profile(State(runtime): State<SharedRuntime>) -> Response {
    menu_action(&runtime, ProfileMenuAction::Profile)
}

async fn menu_settings(State(runtime): State<SharedRuntime>) -> Response {
    menu_action(&runtime, ProfileMenuAction::Settings)
}

async fn menu_logout(State(runtime): State<SharedRuntime>) -> Response {
    menu_action(&runtime, ProfileMenuAction::Logout)
}

async fn session_login(
    State(runtime): State<SharedRuntime>,
    Form(form): Form<LoginForm>,
) -> Response {
    html_action(&runtime, PageId::Dashboard.path(), |rt| {
        rt.portal_mut().login(&form.name)?;
        Ok(PageId::Dashboard.path().to_string())
    })
}

async fn notice_dismiss(
    State(runtime): State<SharedRuntime>,
    Path(id): Path<u64>,
    Form(form): Form<ReturnToForm>,
) -> Response {
    let target = safe_return_to(form.return_to.as_deref()).to_string();
    html_action(&runtime, &target, |rt| {
        rt.portal_mut().dismiss_notice(NoticeId(id));
        Ok(target.clone())
    })
}

async fn api_nav(
    State(runtime): State<SharedRuntime>,
    Query(query): Query<NavQuery>,
) -> Response {
    let path = query.path.unwrap_or_else(|| "/".to_string());
    json_result::<Vec<NavEntryView>>(lock(&runtime).map(|rt| rt.portal().nav_view(&path)))
}

fn record_page(slug: &str) -> Result<PageId, AdapterError> {
    PageId::from_api_slug(slug).ok_or_else(|| AdapterError::UnknownPageSlug {
        slug: slug.to_string(),
    })
}

fn records_for(runtime: &SharedRuntime, slug: &str) -> Result<RecordsResponse, AdapterError> {
    let page = record_page(slug)?;
    let rt = lock(runtime)?;
    let form_page = rt
        .portal()
        .form_page(page)
        .ok_or_else(|| AdapterError::UnknownPageSlug {
            slug: slug.to_string(),
        })?;
    let table = form_page.table();
    Ok(RecordsResponse {
        page: page.api_slug().unwrap_or_else(|| page.capability()),
        title: table.title,
        columns: table.columns,
        rows: form_page.rows(),
        draft: form_page.draft().clone(),
    })
}

async fn api_records(
    State(runtime): State<SharedRuntime>,
    Path(slug): Path<String>,
) -> Response {
    json_result(records_for(&runtime, &slug))
}

fn submit_for(
    runtime: &SharedRuntime,
    slug: &str,
    request: &SubmitRequest,
) -> Result<SubmitResponse, AdapterError> {
    let page = record_page(slug)?;
    let mut rt = lock(runtime)?;
    let now = rt.now();
    let report = rt
        .portal_mut()
        .submit_values(page, &request.values, &request.dates, now)?;
    let message = report.outcome.notice_description();
    Ok(match report.outcome {
        SubmitOutcome::Appended { id, .. } => SubmitResponse {
            outcome: "appended",
            id: Some(id),
            notice_id: report.notice,
            message,
            issues: Vec::new(),
        },
        SubmitOutcome::Rejected { issues } => SubmitResponse {
            outcome: "rejected",
            id: None,
            notice_id: report.notice,
            message,
            issues,
        },
    })
}

/// Validation failures are a normal outcome here, not an HTTP error.
async fn api_submit(
    State(runtime): State<SharedRuntime>,
    Path(slug): Path<String>,
    Json(request): Json<SubmitRequest>,
) -> Response {
    json_result(submit_for(&runtime, &slug, &request))
}

async fn api_notices(State(runtime): State<SharedRuntime>) -> Response {
    json_result::<Vec<Notice>>(lock(&runtime).map(|mut rt| {
        let now = rt.now();
        rt.portal_mut().active_notices(now)
    }))
}
