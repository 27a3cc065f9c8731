//! Root Handler
//!
//! 健康检查与未匹配路由的兜底响应

use axum::Json;
use serde::Serialize;

use crate::infrastructure::http::error::ApiError;

/// 根路由响应
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// 根路由 - 服务运行提示
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Vehicle Service Booking API is running",
    })
}

/// 未匹配路由兜底 - 404 { "error": "Not found" }
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
