//! 请求 DTO

use axum::body::Bytes;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::entities::{NewProduct, ProductPatch};
use crate::domain::value_objects::Condition;
use crate::error::ProductError;

/// 创建商品请求（请求体中的 `id` 会被忽略）
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub desc: String,
    pub price: f64,
    pub condition: Condition,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            desc: req.desc,
            price: req.price,
            condition: req.condition,
        }
    }
}

/// 更新商品请求，所有字段可选
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub price: Option<f64>,
    pub condition: Option<Condition>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            desc: req.desc,
            price: req.price,
            condition: req.condition,
        }
    }
}

/// 解析 JSON 请求体
///
/// 空请求体（或只有空白）返回 `None`，不要求 Content-Type。
pub fn decode_body<T: DeserializeOwned>(body: &Bytes) -> Result<Option<T>, ProductError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(body)?))
}
