#![forbid(unsafe_code)]

//! Server-side HTML for the portal pages.

use peopledesk_engines::display::{format_compact_date, format_picker_date};
use peopledesk_engines::nav_view::NavEntryView;
use peopledesk_kernel_contracts::form::{FieldKind, FieldSpec, FormDraft, FormSpec};
use peopledesk_kernel_contracts::nav::PORTAL_TITLE;
use peopledesk_kernel_contracts::notice::{Notice, NoticeKind};
use peopledesk_kernel_contracts::route::PageId;
use peopledesk_os::dashboard::{
    DashboardView, REGISTRATION_BADGE, REGISTRATION_BODY, REGISTRATION_TITLE,
};
use peopledesk_os::entity_page::{FormListPage, TableCell};
use peopledesk_os::profile::ProfilePage;
use peopledesk_os::profile_menu::ProfileIdentity;

const DATE_PLACEHOLDER: &str = "Pick a date";
const HEADER_TITLE: &str = "Employee Management System";

/// Everything around the page body: header, sidebar, profile menu and notices.
pub struct Chrome<'a> {
    pub current_path: &'a str,
    pub nav: &'a [NavEntryView],
    pub rail_collapsed: bool,
    pub identity: &'a ProfileIdentity,
    pub notices: &'a [Notice],
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn layout(chrome: &Chrome<'_>, title: &str, body: &str) -> String {
    let return_to = escape(chrome.current_path);
    let sidebar_class = if chrome.rail_collapsed {
        "sidebar rail"
    } else {
        "sidebar"
    };
    let mut nav = String::new();
    for entry in chrome.nav {
        nav.push_str(&nav_entry(entry, &return_to));
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title} | {portal}</title></head>\n<body>\n\
<aside class=\"{sidebar_class}\">\n<div class=\"brand\">{portal}</div>\n\
<form method=\"post\" action=\"/nav/sidebar\"><input type=\"hidden\" name=\"return_to\" value=\"{return_to}\"><button type=\"submit\" class=\"sidebar-toggle\">Toggle sidebar</button></form>\n\
<nav><ul>{nav}</ul></nav>\n</aside>\n\
<main>\n<header><span class=\"header-title\">{HEADER_TITLE}</span>{actions}{menu}</header>\n{notices}\n<h1>{title}</h1>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
        portal = PORTAL_TITLE,
        actions = header_actions(chrome.identity),
        menu = profile_menu(chrome.identity),
        notices = notices(chrome.notices, &return_to),
    )
}

fn nav_entry(entry: &NavEntryView, return_to: &str) -> String {
    let mut classes = vec!["nav-item"];
    if entry.active {
        classes.push("active");
    }
    let icon = entry
        .icon
        .map(|i| format!("<span class=\"icon\" data-icon=\"{}\"></span>", i.as_str()))
        .unwrap_or_default();
    let title = escape(&entry.title);
    if !entry.is_group {
        let href = escape(entry.path.as_deref().unwrap_or("/"));
        return format!(
            "<li class=\"{}\"><a href=\"{href}\">{icon}<span>{title}</span></a></li>",
            classes.join(" ")
        );
    }
    if entry.expanded {
        classes.push("expanded");
    }
    let mut children = String::new();
    if entry.children_visible {
        children.push_str("<ul>");
        for child in &entry.children {
            children.push_str(&nav_entry(child, return_to));
        }
        children.push_str("</ul>");
    }
    format!(
        "<li class=\"{}\"><form method=\"post\" action=\"/nav/toggle\">\
<input type=\"hidden\" name=\"group\" value=\"{title}\">\
<input type=\"hidden\" name=\"return_to\" value=\"{return_to}\">\
<button type=\"submit\">{icon}<span>{title}</span></button></form>{children}</li>",
        classes.join(" ")
    )
}

fn header_actions(identity: &ProfileIdentity) -> String {
    let mut out = format!(
        "<a class=\"registration-link\" href=\"{}\" title=\"{REGISTRATION_TITLE}\">{REGISTRATION_TITLE}</a>",
        PageId::Registration.path()
    );
    if identity.signed_in {
        out.push_str(&format!(
            "<span class=\"welcome\">Welcome, {}</span>",
            escape(&identity.display_name)
        ));
    }
    out
}

fn profile_menu(identity: &ProfileIdentity) -> String {
    if !identity.signed_in {
        return format!(
            "<div class=\"profile-menu signed-out\"><span>{}</span>\
<form method=\"post\" action=\"/session/login\"><input type=\"text\" name=\"name\" placeholder=\"Your name\">\
<button type=\"submit\">Sign in</button></form></div>",
            escape(&identity.display_name)
        );
    }
    format!(
        "<div class=\"profile-menu\"><span class=\"avatar\">{initials}</span><span class=\"name\">{name}</span>\
<form method=\"post\" action=\"/menu/profile\"><button type=\"submit\">Profile</button></form>\
<form method=\"post\" action=\"/menu/settings\"><button type=\"submit\">Settings</button></form>\
<form method=\"post\" action=\"/menu/logout\"><button type=\"submit\">Log out</button></form></div>",
        initials = escape(&identity.initials),
        name = escape(&identity.display_name),
    )
}

fn notices(active: &[Notice], return_to: &str) -> String {
    if active.is_empty() {
        return String::new();
    }
    let mut out = String::from("<section class=\"notices\">");
    for notice in active {
        let kind = match notice.kind {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        };
        out.push_str(&format!(
            "<div class=\"notice {kind}\" data-notice-id=\"{id}\"><strong>{title}</strong><p>{description}</p>\
<form method=\"post\" action=\"/notices/{id}/dismiss\"><input type=\"hidden\" name=\"return_to\" value=\"{return_to}\">\
<button type=\"submit\">Dismiss</button></form></div>",
            id = notice.id.0,
            title = escape(&notice.title),
            description = escape(&notice.description),
        ));
    }
    out.push_str("</section>");
    out
}

pub fn dashboard_body(view: &DashboardView) -> String {
    let mut out = format!("<p class=\"greeting\">{}</p>", escape(&view.greeting));
    out.push_str("<section class=\"stats\">");
    for card in view.stats {
        out.push_str(&format!(
            "<div class=\"stat\"><h3>{}</h3><p class=\"value\">{}</p><p>{}</p><p class=\"trend\">{}</p></div>",
            card.title, card.value, card.description, card.trend
        ));
    }
    out.push_str("</section><section class=\"teams\"><h2>Team Distribution</h2><ul>");
    for team in view.teams {
        out.push_str(&format!(
            "<li><span>{}</span> <span>{}</span></li>",
            team.team, team.headcount
        ));
    }
    out.push_str(&format!(
        "</ul><p class=\"total\">Total: {}</p></section><section class=\"activity\"><h2>Recent Activity</h2><ul>",
        view.team_total()
    ));
    for entry in view.activity {
        out.push_str(&format!(
            "<li><span class=\"when\">{}</span> {}</li>",
            entry.when, entry.summary
        ));
    }
    out.push_str("</ul></section>");
    out
}

pub fn registration_body() -> String {
    format!(
        "<section class=\"registration\"><h2>{REGISTRATION_TITLE}</h2>\
<span class=\"badge\">{REGISTRATION_BADGE}</span><p>{REGISTRATION_BODY}</p></section>"
    )
}

pub fn profile_body(profile: &ProfilePage) -> String {
    let form = profile.form();
    let editing = profile.is_editing();
    let fields = form_sections(form, profile.values(), !editing);
    if editing {
        format!(
            "<form method=\"post\" action=\"/profile/save\" class=\"profile editing\">{fields}\
<button type=\"submit\">{}</button></form>",
            form.submit_label
        )
    } else {
        format!(
            "<div class=\"profile viewing\">{fields}</div>\
<form method=\"post\" action=\"/profile/edit\"><button type=\"submit\">Edit Profile</button></form>"
        )
    }
}

pub fn form_page_body(page: &dyn FormListPage) -> String {
    let form = page.form();
    let table = page.table();
    let mut out = format!(
        "<form method=\"post\" action=\"{}\" class=\"record-form\">{}<button type=\"submit\">{}</button></form>",
        page.page().path(),
        form_sections(form, page.draft(), false),
        form.submit_label
    );
    out.push_str(&format!(
        "<section class=\"records\"><h2>{}</h2><p>{}</p><table><thead><tr>",
        table.title, table.description
    ));
    for column in table.columns {
        out.push_str(&format!("<th>{column}</th>"));
    }
    out.push_str("</tr></thead><tbody>");
    for row in page.rows() {
        out.push_str(&format!("<tr data-record-id=\"{}\">", row.id));
        for cell in &row.cells {
            out.push_str(&table_cell(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></section>");
    out
}

fn table_cell(cell: &TableCell) -> String {
    match cell {
        TableCell::Text { text } => format!("<td>{}</td>", escape(text)),
        TableCell::TwoLine { primary, secondary } => format!(
            "<td><div>{}</div><div class=\"secondary\">{}</div></td>",
            escape(primary),
            escape(secondary)
        ),
        TableCell::Badge { badge } => format!(
            "<td><span class=\"badge {}\">{}</span></td>",
            badge.tone.as_str(),
            badge.label
        ),
    }
}

fn form_sections(form: &FormSpec, draft: &FormDraft, read_only: bool) -> String {
    let mut out = String::new();
    for section in form.sections {
        out.push_str("<fieldset>");
        if !section.title.is_empty() {
            out.push_str(&format!("<legend>{}</legend>", section.title));
        }
        if !section.description.is_empty() {
            out.push_str(&format!("<p>{}</p>", section.description));
        }
        for field in section.fields {
            out.push_str(&field_input(form, field, draft, read_only));
        }
        out.push_str("</fieldset>");
    }
    out
}

fn field_input(
    form: &FormSpec,
    field: &FieldSpec,
    draft: &FormDraft,
    read_only: bool,
) -> String {
    let disabled = if read_only { " disabled" } else { "" };
    let value = escape(draft.value(field.key).unwrap_or(""));
    let key = field.key;
    let placeholder = escape(field.placeholder);
    let control = match field.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Number => {
            let input_type = match field.kind {
                FieldKind::Email => "email",
                FieldKind::Number => "number",
                _ => "text",
            };
            format!(
                "<input type=\"{input_type}\" id=\"{key}\" name=\"{key}\" value=\"{value}\" placeholder=\"{placeholder}\"{disabled}>"
            )
        }
        FieldKind::TextArea => format!(
            "<textarea id=\"{key}\" name=\"{key}\" placeholder=\"{placeholder}\"{disabled}>{value}</textarea>"
        ),
        FieldKind::Select(options) => {
            let current = draft.value(key);
            let mut select = format!(
                "<select id=\"{key}\" name=\"{key}\"{disabled}><option value=\"\">{placeholder}</option>"
            );
            for option in options {
                let selected = if current == Some(*option) {
                    " selected"
                } else {
                    ""
                };
                select.push_str(&format!(
                    "<option value=\"{o}\"{selected}>{o}</option>",
                    o = escape(option)
                ));
            }
            select.push_str("</select>");
            select
        }
        FieldKind::Date => {
            let date = draft.date(key);
            let raw = date.map(|d| d.to_string()).unwrap_or_default();
            // Start/end pickers of a range use the short label.
            let in_range = form
                .date_ranges
                .iter()
                .any(|r| r.start == key || r.end == key);
            let shown = match date {
                Some(d) if in_range => format_compact_date(d),
                Some(d) => format_picker_date(d),
                None => DATE_PLACEHOLDER.to_string(),
            };
            format!(
                "<input type=\"date\" id=\"{key}\" name=\"{key}\" value=\"{raw}\"{disabled}>\
<span class=\"picked\">{shown}</span>"
            )
        }
    };
    format!(
        "<div class=\"field\"><label for=\"{key}\">{}</label>{control}</div>",
        escape(&field.display_label())
    )
}

pub fn error_body(status: u16, message: &str) -> String {
    format!(
        "<section class=\"error\"><p class=\"status\">{status}</p><p>{}</p>\
<a href=\"/\">Back to dashboard</a></section>",
        escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use peopledesk_kernel_contracts::notice::NoticeId;
    use peopledesk_kernel_contracts::MonotonicTimeNs;

    #[test]
    fn at_render_01_escape() {
        assert_eq!(
            escape("<a href=\"x\">Tom & 'Jerry'</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn at_render_02_layout_marks_active_and_hides_collapsed_children() {
        let nav = vec![NavEntryView {
            title: "Training".to_string(),
            path: None,
            icon: None,
            is_group: true,
            active: true,
            expanded: false,
            children_visible: false,
            children: vec![NavEntryView {
                title: "Training Attended".to_string(),
                path: Some("/training/attended".to_string()),
                icon: None,
                is_group: false,
                active: true,
                expanded: false,
                children_visible: false,
                children: Vec::new(),
            }],
        }];
        let identity = ProfileIdentity {
            display_name: "Jane Smith".to_string(),
            initials: "JS".to_string(),
            signed_in: true,
        };
        let notices = vec![Notice {
            id: NoticeId(7),
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            description: "Please fill all required fields.".to_string(),
            expires_at: MonotonicTimeNs(1),
        }];
        let html = layout(
            &Chrome {
                current_path: "/training/attended",
                nav: &nav,
                rail_collapsed: true,
                identity: &identity,
                notices: &notices,
            },
            "Training Attended",
            "<p>body</p>",
        );
        assert!(html.contains("class=\"sidebar rail\""));
        assert!(html.contains("<li class=\"nav-item active\"><form"));
        assert!(!html.contains("href=\"/training/attended\""));
        assert!(html.contains("<span class=\"avatar\">JS</span>"));
        assert!(html.contains("action=\"/notices/7/dismiss\""));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn at_render_03_badge_cell_uses_tone() {
        let cell = TableCell::Badge {
            badge: peopledesk_engines::display::status_badge(
                peopledesk_kernel_contracts::RecordStatus::Expired,
            ),
        };
        let html = table_cell(&cell);
        assert!(html.contains(">Expired</span>"));
    }

    #[test]
    fn at_render_04_range_dates_use_compact_label() {
        use chrono::NaiveDate;
        use peopledesk_kernel_contracts::certification::CERTIFICATION_FORM;
        use peopledesk_kernel_contracts::training::TRAINING_ATTENDED_FORM;

        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut draft = FormDraft::empty();
        draft
            .set_date(&TRAINING_ATTENDED_FORM, "start_date", Some(date))
            .unwrap();
        let html = form_sections(&TRAINING_ATTENDED_FORM, &draft, false);
        assert!(html.contains("<span class=\"picked\">Jun 01</span>"));
        assert!(html.contains("value=\"2024-06-01\""));

        let mut draft = FormDraft::empty();
        draft
            .set_date(&CERTIFICATION_FORM, "certification_date", Some(date))
            .unwrap();
        let html = form_sections(&CERTIFICATION_FORM, &draft, false);
        assert!(html.contains("<span class=\"picked\">June 1st, 2024</span>"));
    }
}
