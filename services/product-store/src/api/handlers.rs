//! 商品 HTTP 处理器

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use shop_common::ApiResponse;
use shop_errors::AppResult;

use super::dto::{CreateProductRequest, UpdateProductRequest, decode_body};
use crate::application::{
    CreateProductCommand, DeleteProductCommand, GetProductQuery, ListProductsQuery,
    ServiceHandler, UpdateProductCommand,
};
use crate::domain::entities::Product;
use crate::domain::value_objects::ProductId;
use crate::error::ProductError;

pub const PRODUCT_REMOVED: &str = "product has been removed";

pub type AppState = Arc<ServiceHandler>;

/// GET /api
pub async fn get_products(
    State(handler): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let products = handler.list_products(ListProductsQuery).await?;
    Ok(Json(ApiResponse::success(products)))
}

/// GET /api/{id}
pub async fn get_product(
    State(handler): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = handler
        .get_product(GetProductQuery {
            id: ProductId::from(id),
        })
        .await?;
    Ok(Json(ApiResponse::success(product)))
}

/// POST /api
pub async fn add_product(
    State(handler): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let req: CreateProductRequest = decode_body(&body)?.ok_or(ProductError::MissingBody)?;

    let product = handler
        .create_product(CreateProductCommand {
            product: req.into(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(product))))
}

/// PUT /api/{id}
///
/// 空请求体视为不修改任何字段。
pub async fn update_product(
    State(handler): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let req: UpdateProductRequest = decode_body(&body)?.unwrap_or_default();

    let products = handler
        .update_product(UpdateProductCommand {
            id: ProductId::from(id),
            patch: req.into(),
        })
        .await?;

    Ok(Json(ApiResponse::success(products)))
}

/// DELETE /api/{id}
pub async fn delete_product(
    State(handler): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let remaining = handler
        .delete_product(DeleteProductCommand {
            id: ProductId::from(id),
        })
        .await?;

    Ok(Json(ApiResponse::success_with_msg(PRODUCT_REMOVED, remaining)))
}
