#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use peopledesk_adapter::{
    build_router, AdapterConfig, AdapterRuntime, ATTENDEE_SOURCE_ENV, EMPLOYEE_NAME_ENV,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn spawn_portal(env: &[(&str, &str)]) -> SocketAddr {
    let map: BTreeMap<String, String> = env
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = AdapterConfig::from_env_var_map(|key| map.get(key).cloned()).expect("config");
    let runtime = AdapterRuntime::new(&config).expect("runtime");
    let app = build_router(Arc::new(Mutex::new(runtime)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    body: Option<(&str, &str)>,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let req = match body {
        Some((content_type, body)) => format!(
            "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        ),
        None => format!(
            "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\nContent-Length: 0\r\n\r\n"
        ),
    };
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");
    (status, head.to_ascii_lowercase(), body.to_string())
}

async fn get_json(addr: SocketAddr, path: &str) -> serde_json::Value {
    let (status, _, body) = send_raw(addr, "GET", path, None).await;
    assert_eq!(status, 200, "{path}: {body}");
    serde_json::from_str(&body).expect("json body")
}

const FORM: &str = "application/x-www-form-urlencoded";
const JSON: &str = "application/json";

#[tokio::test]
async fn dashboard_greets_configured_employee() {
    let addr = spawn_portal(&[(EMPLOYEE_NAME_ENV, "Shruthi")]).await;
    let (status, _, body) = send_raw(addr, "GET", "/", None).await;
    assert_eq!(status, 200);
    assert!(body.contains("Welcome back, Shruthi!"));
    assert!(body.contains("Employee Portal"));
    assert!(body.contains("<span class=\"avatar\">S</span>"));
    assert!(body.contains("Welcome, Shruthi</span>"));
    assert!(body.contains("href=\"/registration\""));

    let health = get_json(addr, "/healthz").await;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["signed_in"], true);
}

#[tokio::test]
async fn stub_and_unknown_routes_are_distinguished() {
    let addr = spawn_portal(&[]).await;
    assert_eq!(send_raw(addr, "GET", "/registration", None).await.0, 200);
    assert_eq!(send_raw(addr, "GET", "/admin/settings", None).await.0, 501);
    assert_eq!(send_raw(addr, "GET", "/payroll", None).await.0, 404);
    assert_eq!(send_raw(addr, "POST", "/menu/settings", None).await.0, 501);
}

#[tokio::test]
async fn incomplete_training_post_keeps_rows_and_raises_error_notice() {
    let addr = spawn_portal(&[]).await;
    let (status, head, _) = send_raw(
        addr,
        "POST",
        "/training/attended",
        Some((FORM, "course_name=Node.js+Development")),
    )
    .await;
    assert_eq!(status, 303);
    assert!(head.contains("location: /training/attended"));

    let records = get_json(addr, "/api/pages/training-attended/records").await;
    assert_eq!(records["rows"].as_array().map(Vec::len), Some(2));
    assert_eq!(
        records["draft"]["values"]["course_name"],
        "Node.js Development"
    );

    let notices = get_json(addr, "/api/notices").await;
    let notices = notices.as_array().expect("notice list");
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0]["kind"], "Error");
    assert_eq!(notices[0]["description"], "Please fill all required fields.");

    let (_, _, page) = send_raw(addr, "GET", "/training/attended", None).await;
    assert!(page.contains("value=\"Node.js Development\" selected"));
}

#[tokio::test]
async fn json_submit_appends_certification() {
    let addr = spawn_portal(&[(ATTENDEE_SOURCE_ENV, "fixed:9")]).await;
    let body = r#"{"values":{"certification_authority":"AWS","certification_title":"Cloud Practitioner","certification_type":"Cloud"},"dates":{"certification_date":"2024-06-01"}}"#;
    let (status, _, body) = send_raw(
        addr,
        "POST",
        "/api/pages/certification/submit",
        Some((JSON, body)),
    )
    .await;
    assert_eq!(status, 200, "{body}");
    let outcome: serde_json::Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(outcome["outcome"], "appended");
    assert_eq!(outcome["id"], 4);
    assert_eq!(outcome["message"], "Certification added successfully.");

    let records = get_json(addr, "/api/pages/certification/records").await;
    let rows = records["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3]["cells"][1]["text"], "Cloud Practitioner");
    assert_eq!(rows[3]["cells"][4]["badge"]["label"], "Active");
}

#[tokio::test]
async fn unknown_record_slug_is_not_found() {
    let addr = spawn_portal(&[]).await;
    let (status, _, body) = send_raw(addr, "GET", "/api/pages/payroll/records", None).await;
    assert_eq!(status, 404);
    assert!(body.contains("unknown record page"));
}

#[tokio::test]
async fn nav_toggle_redirects_only_to_known_routes() {
    let addr = spawn_portal(&[]).await;
    let (status, head, _) = send_raw(
        addr,
        "POST",
        "/nav/toggle",
        Some((FORM, "group=Training&return_to=https%3A%2F%2Fevil.example%2F")),
    )
    .await;
    assert_eq!(status, 303);
    assert!(head.contains("location: /\r\n") || head.ends_with("location: /"));

    let nav = get_json(addr, "/api/nav?path=/training/imparted").await;
    let training = nav
        .as_array()
        .expect("nav entries")
        .iter()
        .find(|e| e["title"] == "Training")
        .expect("training group");
    assert_eq!(training["expanded"], true);
    assert_eq!(training["active"], true);

    let (status, _, _) = send_raw(
        addr,
        "POST",
        "/nav/toggle",
        Some((FORM, "group=Payroll&return_to=%2F")),
    )
    .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn profile_save_requires_edit_mode() {
    let addr = spawn_portal(&[]).await;
    let (status, _, _) = send_raw(addr, "POST", "/profile/save", Some((FORM, ""))).await;
    assert_eq!(status, 409);

    assert_eq!(send_raw(addr, "POST", "/profile/edit", None).await.0, 303);
    let (status, head, _) =
        send_raw(addr, "POST", "/profile/save", Some((FORM, "grade=L4"))).await;
    assert_eq!(status, 303);
    assert!(head.contains("location: /profile"));

    let (_, _, page) = send_raw(addr, "GET", "/profile", None).await;
    assert!(page.contains("Profile Updated"));
    assert!(page.contains("value=\"L4\""));
}

#[tokio::test]
async fn logout_then_login_updates_identity() {
    let addr = spawn_portal(&[(EMPLOYEE_NAME_ENV, "Shruthi")]).await;
    assert_eq!(send_raw(addr, "POST", "/menu/logout", None).await.0, 303);
    let (_, _, page) = send_raw(addr, "GET", "/", None).await;
    assert!(page.contains("Signed out"));

    let (status, _, _) =
        send_raw(addr, "POST", "/session/login", Some((FORM, "name=Jane+Smith"))).await;
    assert_eq!(status, 303);
    let (_, _, page) = send_raw(addr, "GET", "/", None).await;
    assert!(page.contains("<span class=\"avatar\">JS</span>"));
}
