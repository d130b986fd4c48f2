use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, Response};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use crate::routes::routes;
use db::test_utils::setup_test_db;
use util::state::AppState;

mod course_routes_test;

/// Builds the full router over a fresh in-memory database and hands the
/// connection back so tests can seed and inspect rows directly.
async fn test_app() -> (Router, DatabaseConnection) {
    let db = setup_test_db().await;
    let app = routes(AppState::new(db.clone()));
    (app, db)
}

async fn get(app: &Router, path: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, path: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
