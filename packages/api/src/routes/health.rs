use axum::http::StatusCode;

/// Liveness check.
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Healthy!")
}
