mod common;

use axum::http::StatusCode;
use common::{body_json, send_get, test_app};
use mettai_config::Profile;

#[tokio::test]
async fn test_healthz_responds_ok() {
    let app = test_app(Profile::Testing);

    let response = send_get(app, "/healthz", "testserver").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_accounts_module_is_mounted() {
    let app = test_app(Profile::Testing);

    let response = send_get(app, "/accounts", "testserver").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["app"], "accounts");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_rules_module_is_mounted() {
    let app = test_app(Profile::Testing);

    let response = send_get(app, "/rules", "testserver").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["app"], "rules");
}

#[tokio::test]
async fn test_admin_index_lists_installed_apps() {
    let app = test_app(Profile::Testing);

    let response = send_get(app, "/admin", "testserver").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let labels: Vec<&str> = body["apps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|app| app["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["accounts", "rules"]);
}

#[tokio::test]
async fn test_admin_app_detail() {
    let app = test_app(Profile::Testing);

    let response = send_get(app, "/admin/apps/rules", "testserver").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["label"], "rules");
    assert_eq!(body["prefix"], "/rules");
}

#[tokio::test]
async fn test_admin_unknown_app_is_404() {
    let app = test_app(Profile::Testing);

    let response = send_get(app, "/admin/apps/blog", "testserver").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("blog"));
}

#[tokio::test]
async fn test_debug_routes_mounted_when_debug_enabled() {
    let app = test_app(Profile::Development);

    let response = send_get(app.clone(), "/__debug__/settings", "localhost").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send_get(app, "/__debug__/api-docs/openapi.json", "localhost").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_debug_routes_absent_when_debug_disabled() {
    let app = test_app(Profile::Testing);

    let response = send_get(app.clone(), "/__debug__/settings", "testserver").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send_get(app, "/__debug__/swagger-ui", "testserver").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_settings_panel_masks_secrets() {
    let app = test_app(Profile::Development);

    let response = send_get(app, "/__debug__/settings", "localhost").await;
    let body = body_json(response).await;

    assert_eq!(body["secret_key"], "********");
    assert_eq!(body["profile"], "development");
    assert!(
        !body["database"]["url"]
            .as_str()
            .unwrap()
            .contains("mettai_dev_password")
    );
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app(Profile::Testing);

    let response = send_get(app, "/nope", "testserver").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
