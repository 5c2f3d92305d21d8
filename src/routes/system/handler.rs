use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::utils;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// 根路由，返回服务标识和当前主机名
#[axum::debug_handler]
pub async fn home() -> impl IntoResponse {
    (
        StatusCode::OK,
        format!("Axum + PostgreSQL is working! Host: {}", utils::hostname()),
    )
}

/// 存活检查，不依赖数据库和缓存
#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_body_shape_is_stable() {
        let body = serde_json::to_string(&HealthResponse { status: "ok" }).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
    }
}
