//! 通用类型定义

use serde::{Deserialize, Serialize};

/// 统一响应包装
///
/// 成功时携带 `data`，失败时携带 `msg`，删除等操作可以同时携带两者。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            msg: None,
            data: Some(data),
        }
    }

    /// 带消息的成功响应
    pub fn success_with_msg(msg: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            msg: Some(msg.into()),
            data: Some(data),
        }
    }

    /// 失败响应
    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            msg: Some(msg.into()),
            data: None,
        }
    }
}
