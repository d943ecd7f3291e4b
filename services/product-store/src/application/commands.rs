//! Product commands

use crate::domain::entities::{NewProduct, ProductPatch};
use crate::domain::value_objects::ProductId;

/// 创建商品命令
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub product: NewProduct,
}

/// 更新商品命令
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub id: ProductId,
    pub patch: ProductPatch,
}

/// 删除商品命令
#[derive(Debug, Clone)]
pub struct DeleteProductCommand {
    pub id: ProductId,
}
