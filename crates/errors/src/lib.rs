//! shop-errors - 统一错误处理
//!
//! 错误以 `{ "success": false, "msg": ... }` 的形式返回给调用方

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shop_common::ApiResponse;
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
        }
    }

    /// 面向调用方的消息（不带错误类别前缀）
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::Conflict(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ApiResponse::<()>::failure(self.message());
        (status, Json(body)).into_response()
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
