//! Business logic handler

use std::sync::Arc;

use shop_errors::AppResult;
use tracing::{info, warn};

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::ProductId;
use crate::error::ProductError;

use super::commands::*;
use super::queries::*;

pub struct ServiceHandler {
    product_repo: Arc<dyn ProductRepository>,
}

impl ServiceHandler {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// 列出全部商品
    pub async fn list_products(&self, _query: ListProductsQuery) -> AppResult<Vec<Product>> {
        self.product_repo.list().await
    }

    /// 获取单个商品
    pub async fn get_product(&self, query: GetProductQuery) -> AppResult<Product> {
        match self.product_repo.find_by_id(&query.id).await? {
            Some(product) => Ok(product),
            None => {
                warn!(product_id = %query.id, "Product not found");
                Err(ProductError::NotFound.into())
            }
        }
    }

    /// 创建商品
    ///
    /// ID 由服务端生成，请求中的 ID 被忽略。
    pub async fn create_product(&self, cmd: CreateProductCommand) -> AppResult<Product> {
        let product = Product::new(ProductId::generate(), cmd.product);

        self.product_repo.insert(&product).await?;

        info!(
            product_id = %product.id,
            name = %product.name,
            condition = %product.condition,
            "Product created"
        );

        Ok(product)
    }

    /// 部分更新商品，返回更新后的完整集合
    pub async fn update_product(&self, cmd: UpdateProductCommand) -> AppResult<Vec<Product>> {
        match self.product_repo.update(&cmd.id, &cmd.patch).await? {
            Some(products) => {
                info!(product_id = %cmd.id, "Product updated");
                Ok(products)
            }
            None => {
                warn!(product_id = %cmd.id, "Product not found for update");
                Err(ProductError::NotFound.into())
            }
        }
    }

    /// 删除商品，返回剩余集合
    pub async fn delete_product(&self, cmd: DeleteProductCommand) -> AppResult<Vec<Product>> {
        let outcome = self.product_repo.delete(&cmd.id).await?;

        if outcome.removed > 0 {
            info!(product_id = %cmd.id, "Product removed");
        } else {
            info!(product_id = %cmd.id, "No product to remove");
        }

        Ok(outcome.remaining)
    }
}
