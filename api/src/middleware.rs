//! Request logging middleware.

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs method, path, response status and latency for every request.
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let start = Instant::now();
    let response = next.run(req).await;

    tracing::info!(
        %method,
        path,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "handled request"
    );

    response
}
