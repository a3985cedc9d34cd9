//! 错误到 HTTP 响应的映射

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cosmo_errors::AppError;
use serde_json::json;

/// API 错误包装
///
/// 响应体形状是对外契约：
/// - 校验失败 / 服务商显式拒绝 -> 400 {"error": ...}
/// - 其余未预期失败 -> 500 {"error": "Internal server error", "message": ...}
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match self.0 {
            AppError::Validation(msg) => json!({ "error": msg }),
            AppError::Provider(payload) => json!({ "error": payload }),
            AppError::ExternalService(msg) | AppError::Internal(msg) => json!({
                "error": "Internal server error",
                "message": msg,
            }),
        };

        (status, Json(body)).into_response()
    }
}
