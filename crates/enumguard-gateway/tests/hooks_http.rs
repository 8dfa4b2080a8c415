//! End-to-end hook invocation through the router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use enumguard_gateway::{app_state::AppState, config, router::build_router};

const CFG: &str = r#"
version: 1
site:
  root: "https://example.com/"
"#;

fn app_with(cfg: &str) -> (Router, AppState) {
    let state = AppState::new(config::load_from_str(cfg).unwrap()).unwrap();
    (build_router(state.clone()), state)
}

fn app() -> Router {
    app_with(CFG).0
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let body = res.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, body)
}

async fn call(app: Router, hook: &str, args: Value) -> (StatusCode, Value) {
    let req = Request::post(format!("/v1/hooks/{hook}"))
        .header("content-type", "application/json")
        .body(Body::from(args.to_string()))
        .unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn redirect_canonical_suppressed_for_author_query() {
    let (status, body) = call(
        app(),
        "redirect_canonical",
        json!({ "redirect_url": "https://example.com/author/admin/", "requested_url": "https://example.com/?author=1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "v": 1, "point": "redirect_canonical", "value": null }));

    let (_, body) = call(
        app(),
        "redirect_canonical",
        json!({ "redirect_url": "https://example.com/hello/", "requested_url": "https://example.com/?p=1" }),
    )
    .await;
    assert_eq!(body["value"], "https://example.com/hello/");
}

#[tokio::test]
async fn author_link_uses_configured_root() {
    let (status, body) = call(
        app(),
        "author_link",
        json!({ "link": "https://example.com/author/gilzowp/", "author_id": 5 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "https://example.com/?author=5");
}

#[tokio::test]
async fn author_feed_link_degenerate_value_is_null() {
    let (_, ok) = call(app(), "author_feed_link", json!({ "link": "/?author=5/feed/", "feed": "rss2" })).await;
    assert_eq!(ok["value"], "/?author=5&feed=rss2");

    let (status, degenerate) = call(
        app(),
        "author_feed_link",
        json!({ "link": "https://example.com/?author=5/feed/", "feed": "rss2" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(degenerate["value"].is_null());
}

#[tokio::test]
async fn body_class_and_rest_user_filtered() {
    let (_, body) = call(
        app(),
        "body_class",
        json!({ "classes": ["post", "author", "author-admin", "author-9"], "is_author_archive": true }),
    )
    .await;
    assert_eq!(body["value"], json!(["post", "author", "author-9"]));

    let (_, body) = call(
        app(),
        "rest_prepare_user",
        json!({ "response": { "id": 1, "slug": "gilzowp", "name": "G" }, "user": null, "request": {} }),
    )
    .await;
    assert_eq!(body["value"], json!({ "id": 1, "name": "G" }));
}

#[tokio::test]
async fn authenticate_collapses_enumerating_errors_only() {
    let (_, body) = call(
        app(),
        "authenticate",
        json!({ "outcome": { "error": { "errors": { "invalid_username": ["Unknown username."] } } } }),
    )
    .await;
    assert!(body["value"].is_null());

    let locked = json!({ "error": { "errors": { "account_locked": ["Locked."] } } });
    let (_, body) = call(app(), "authenticate", json!({ "outcome": locked.clone() })).await;
    assert_eq!(body["value"], locked);
}

#[tokio::test]
async fn unknown_hook_is_bad_request() {
    let (status, body) = call(app(), "login_errors", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "UNKNOWN_HOOK");
}

#[tokio::test]
async fn malformed_arguments_are_bad_request() {
    let (status, body) = call(app(), "author_link", json!({ "author_id": "three" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");

    let (status, body) = call(app(), "body_class", json!({ "classes": [], "page": "author" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");

    let req = Request::post("/v1/hooks/body_class").body(Body::from("{not json")).unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn disabled_hook_is_not_found() {
    let cfg = r#"
version: 1
site:
  root: "/"
hooks:
  enabled: ["authenticate"]
"#;
    let (router, _) = app_with(cfg);
    let (status, body) = call(router, "body_class", json!({ "classes": ["post"] })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "HOOK_DISABLED");
}

#[tokio::test]
async fn metrics_count_invocations() {
    let (router, state) = app_with(CFG);
    let _ = call(router.clone(), "body_class", json!({ "classes": ["post"] })).await;
    let _ = call(router.clone(), "body_class", json!({ "classes": 1 })).await;
    let _ = call(router.clone(), "nope", json!({})).await;

    let m = state.metrics();
    assert_eq!(m.hook_invocations.get(&[("hook", "body_class"), ("result", "ok")]), 1);
    assert_eq!(m.hook_invocations.get(&[("result", "BAD_REQUEST"), ("hook", "body_class")]), 1);
    assert_eq!(m.rejected_requests.get(&[("code", "UNKNOWN_HOOK")]), 1);

    let req = Request::get("/metrics").body(Body::empty()).unwrap();
    let (status, body) = send(router, req).await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("enumguard_hook_invocations_total{hook=\"body_class\",result=\"ok\"} 1"));
    assert!(text.contains("enumguard_hooks_enabled 6"));
}

#[tokio::test]
async fn readyz_reports_draining() {
    let (router, state) = app_with(CFG);
    let req = || Request::get("/readyz").body(Body::empty()).unwrap();

    let (status, _) = send(router.clone(), req()).await;
    assert_eq!(status, StatusCode::OK);

    state.metrics().set_draining();
    let (status, body) = send(router, req()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, b"draining");
}

#[tokio::test]
async fn authenticate_accepts_host_shaped_outcomes() {
    let (status, body) = call(
        app(),
        "authenticate",
        json!({ "outcome": { "error": { "errors": { "invalid_username": ["Unknown username."] }, "error_data": {} } } }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["value"].is_null());

    let user = json!({ "user": { "ID": 2, "user_login": "admin" } });
    let (status, body) = call(app(), "authenticate", json!({ "outcome": user.clone() })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], user);
}

#[tokio::test]
async fn oversized_body_is_json_error() {
    let cfg = r#"
version: 1
gateway:
  max_body_bytes: 1024
site:
  root: "/"
"#;
    let (router, state) = app_with(cfg);
    let classes: Vec<String> = (0..400).map(|i| format!("c{i}")).collect();
    let payload = json!({ "classes": classes }).to_string();
    assert!(payload.len() > 2048);

    let req = Request::post("/v1/hooks/body_class")
        .header("content-type", "application/json")
        .body(Body::from(payload))
        .unwrap();
    let (status, body) = send(router, req).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "PAYLOAD_TOO_LARGE");
    assert!(body["message"].is_string());

    let m = state.metrics();
    assert_eq!(m.rejected_requests.get(&[("code", "PAYLOAD_TOO_LARGE")]), 1);
    assert_eq!(m.hook_invocations.get(&[("hook", "body_class"), ("result", "ok")]), 0);
}
