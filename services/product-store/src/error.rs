//! 服务错误定义

use shop_errors::AppError;
use thiserror::Error;

use crate::domain::value_objects::ProductId;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("no product found")]
    NotFound,

    #[error("cannot add product")]
    MissingBody,

    #[error("invalid product payload: {0}")]
    InvalidPayload(String),

    #[error("product id {0} already exists")]
    DuplicateId(ProductId),
}

impl From<serde_json::Error> for ProductError {
    fn from(error: serde_json::Error) -> Self {
        ProductError::InvalidPayload(error.to_string())
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound => AppError::not_found(err.to_string()),
            ProductError::MissingBody | ProductError::InvalidPayload(_) => {
                AppError::validation(err.to_string())
            }
            ProductError::DuplicateId(_) => AppError::conflict(err.to_string()),
        }
    }
}
