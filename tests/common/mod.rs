use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use mettai::router::init_router;
use mettai::state::init_app_state;
use mettai_config::{Env, Profile, Settings};
use tower::ServiceExt;

/// Production requires its keys from the environment; this is the minimal
/// valid set.
#[allow(dead_code)]
pub fn production_env() -> Env {
    Env::empty()
        .with("SECRET_KEY", "integration-test-secret")
        .with("ALLOWED_HOSTS", "api.mettai.app, .mettai.dev")
        .with("DATABASE_URL", "postgres://app:pw@db.internal:5432/mettai")
        .with("CORS_ALLOWED_ORIGINS", "https://app.mettai.app")
}

/// Build the full router for a profile. The pool connects lazily, so no
/// database is needed as long as handlers do not touch it.
pub fn test_app(profile: Profile) -> Router {
    test_app_with(profile, Env::empty())
}

#[allow(dead_code)]
pub fn test_app_with(profile: Profile, env: Env) -> Router {
    let settings = Settings::load(profile, &env).unwrap();
    let state = init_app_state(settings).unwrap();
    init_router(state)
}

pub async fn send_get(app: Router, uri: &str, host: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header("host", host)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
