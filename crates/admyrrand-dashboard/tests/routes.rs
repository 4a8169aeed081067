//! Router-level tests: every route is driven through `tower::ServiceExt::oneshot`.
//!
//! Tests run on a paused clock so page-load announcements can be observed
//! deterministically.

use admyrrand_core::AdmyrrandConfig;
use admyrrand_dashboard::{AppState, create_router};
use admyrrand_notify::Phase;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use std::time::Duration;
use tower::ServiceExt;

fn app() -> (Router, AppState) {
    let state = AppState::from_config(AdmyrrandConfig::default()).expect("inside a runtime");
    (create_router(state.clone()), state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test(start_paused = true)]
async fn test_pages_render() {
    let (app, _) = app();
    let pages = [
        ("/", "Recent Transactions"),
        ("/analytics", "Channel Performance"),
        ("/api-explorer", "API Explorer"),
        ("/documents", "Q4 Financial Report.pdf"),
        ("/messages", "Sarah Wilson"),
        ("/reports", "Monthly Revenue Report"),
        ("/settings", "Profile Information"),
    ];

    for (uri, needle) in pages {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains(needle), "{uri} should contain {needle}");
        assert!(body.contains(r#"id="toast-slot""#), "{uri} should have the toast slot");
    }
}

#[tokio::test(start_paused = true)]
async fn test_page_announces_after_delay() {
    let (app, state) = app();
    let (status, _) = send(&app, get("/documents")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(state.notifications().snapshot().is_none());

    tokio::time::sleep(Duration::from_millis(1001)).await;
    let snap = state.notifications().snapshot().unwrap();
    assert_eq!(snap.notification.title, "Documents Loaded");
    assert_eq!(snap.notification.duration_ms, 3000);

    let (_, fragment) = send(&app, get("/api/notification")).await;
    assert!(fragment.contains("Documents Loaded"));
    assert!(fragment.contains("Your documents are ready for viewing and management."));
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_welcome_lasts_five_seconds() {
    let (app, state) = app();
    send(&app, get("/")).await;

    tokio::time::sleep(Duration::from_millis(1001)).await;
    let snap = state.notifications().snapshot().unwrap();
    assert_eq!(snap.notification.title, "Welcome to Admyrrand Analytics!");
    assert_eq!(snap.notification.duration_ms, 5000);
}

#[tokio::test(start_paused = true)]
async fn test_page_filters_from_query() {
    let (app, _) = app();

    let (_, body) = send(&app, get("/documents?q=report&category=all")).await;
    assert!(body.contains("Q4 Financial Report.pdf"));
    assert!(!body.contains("Backup Data.zip"));

    let (_, body) = send(&app, get("/api-explorer?method=POST")).await;
    assert!(body.contains("Create Report"));

    let (_, body) = send(&app, get("/analytics?range=6m&metric=conversions")).await;
    assert!(body.contains("Conversions Trend"));
    assert!(body.contains(r#"<option value="6m" selected>"#));

    let (_, body) = send(&app, get("/settings?tab=integrations")).await;
    assert!(body.contains("Mailchimp"));
}

#[tokio::test(start_paused = true)]
async fn test_fragments() {
    let (app, _) = app();

    let (status, body) = send(&app, get("/fragments/documents?q=REPORT")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Q4 Financial Report.pdf"));
    assert!(!body.contains("<html"));

    let (_, body) = send(&app, get("/fragments/transactions?status=failed")).await;
    assert!(body.contains("Emily Wilson"));
    assert!(!body.contains("John Smith"));

    let (_, body) = send(&app, get("/fragments/conversations?q=zzz")).await;
    assert!(body.contains("No conversations"));

    let (status, _) = send(&app, get("/fragments/widgets")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn test_live_updates_feed() {
    let (app, _) = app();

    let (_, body) = send(&app, get("/")).await;
    assert!(body.contains(r#"hx-get="/fragments/updates""#));
    assert!(body.contains("Waiting for updates..."));

    tokio::time::sleep(Duration::from_millis(4_800)).await;
    let (status, body) = send(&app, get("/fragments/updates")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<html"));
    assert!(body.contains("Revenue"));
    assert!(body.contains("+7%"));
    assert!(body.contains("1 recent updates"));

    // Six more readings land; only the newest five stay.
    tokio::time::sleep(Duration::from_millis(24_000)).await;
    let (_, body) = send(&app, get("/fragments/updates")).await;
    assert!(body.contains("5 recent updates"));
    assert_eq!(body.matches("data-seq=").count(), 5);
    assert!(body.contains(r#"data-seq="7""#));
    assert!(!body.contains(r#"data-seq="2""#));

    let (status, body) = send(&app, post("/api/updates/toggle", "text/plain", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Offline"));
    assert!(body.contains(r#"data-connected="false""#));

    tokio::time::sleep(Duration::from_millis(60_000)).await;
    let (_, body) = send(&app, get("/fragments/updates")).await;
    assert!(body.contains(r#"data-seq="7""#));
    assert!(!body.contains(r#"data-seq="8""#));

    let (_, body) = send(&app, post("/api/updates/toggle", "text/plain", "")).await;
    assert!(body.contains(r#"data-connected="true""#));
}

#[tokio::test(start_paused = true)]
async fn test_notify_and_json_view() {
    let (app, _) = app();

    let (status, body) = send(&app, get("/api/notification.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "null");

    let (status, body) = send(
        &app,
        post(
            "/api/notify",
            "application/json",
            r#"{"kind":"error","title":"Failed","duration_ms":-1}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["notification"]["title"], "Failed");
    assert_eq!(json["notification"]["kind"], "error");
    assert_eq!(json["notification"]["duration_ms"], 5000);
    assert_eq!(json["phase"], "visible");

    let (_, body) = send(&app, get("/api/notification.json")).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["notification"]["title"], "Failed");
}

#[tokio::test(start_paused = true)]
async fn test_notify_rejects_bad_body() {
    let (app, state) = app();

    let (status, _) = send(
        &app,
        post("/api/notify", "application/json", r#"{"kind":"fatal","title":"x"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, post("/api/notify", "application/json", "not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(state.notifications().snapshot().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_closes_then_hides() {
    let (app, state) = app();
    send(
        &app,
        post("/api/notify", "application/json", r#"{"title":"Saved"}"#),
    )
    .await;

    let (status, body) = send(&app, post("/api/notification/dismiss", "text/plain", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-phase="closing""#));

    tokio::time::sleep(Duration::from_millis(201)).await;
    assert_eq!(state.notifications().phase(), Phase::Hidden);
    let (_, body) = send(&app, get("/api/notification")).await;
    assert!(body.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_quick_actions() {
    let (app, _) = app();
    let form = "application/x-www-form-urlencoded";

    let (status, body) = send(&app, post("/api/actions/share-dashboard", form, "")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Share Dashboard"));
    assert!(body.contains(r#"data-kind="warning""#));

    let (_, body) = send(&app, post("/api/actions/schedule-export", form, "")).await;
    assert!(body.contains("Export Scheduled"));

    let (status, _) = send(&app, post("/api/actions/self-destruct", form, "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn test_action_body_must_be_a_form() {
    let (app, state) = app();

    let (status, _) = send(
        &app,
        post("/api/actions/save-profile", "application/json", "{not a form"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(state.notifications().snapshot().is_none());

    let bare = Request::builder()
        .method("POST")
        .uri("/api/actions/save-profile")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, bare).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Profile Updated"));
}

#[tokio::test(start_paused = true)]
async fn test_send_message_requires_text() {
    let (app, state) = app();
    let form = "application/x-www-form-urlencoded";

    let (status, body) = send(&app, post("/api/actions/send-message", form, "message=+++")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert!(state.notifications().snapshot().is_none());

    let (_, body) = send(&app, post("/api/actions/send-message", form, "message=On+my+way")).await;
    assert!(body.contains("Message Sent"));
    assert_eq!(state.notifications().snapshot().unwrap().notification.duration_ms, 2000);
}

#[tokio::test(start_paused = true)]
async fn test_transactions_csv() {
    let (app, _) = app();
    let resp = app
        .clone()
        .oneshot(get("/api/transactions.csv?status=pending&sort=amount&dir=desc"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
    assert!(
        resp.headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .contains("transactions.csv")
    );

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Lisa Anderson,"));
    assert!(lines[2].starts_with("Sarah Johnson,"));
}

#[tokio::test(start_paused = true)]
async fn test_assets_and_health() {
    let (app, _) = app();

    let (status, body) = send(&app, get("/assets/toast.js")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("toast-slot"));

    let (status, _) = send(&app, get("/assets/missing.js")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["notification"], "hidden");
}
