//! 内存商品仓储
//!
//! 集合由单个 `RwLock` 保护，每个操作只持有一次锁。

use async_trait::async_trait;
use shop_domain_core::Entity;
use shop_errors::AppResult;
use tokio::sync::RwLock;
use tracing::debug;

use super::seed::seed_products;
use crate::domain::entities::{Product, ProductPatch};
use crate::domain::repositories::{DeleteOutcome, ProductRepository};
use crate::domain::value_objects::ProductId;
use crate::error::ProductError;

pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    /// 空集合
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// 带示例数据的集合
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.is_identified_by(id)).cloned())
    }

    async fn insert(&self, product: &Product) -> AppResult<()> {
        let mut products = self.products.write().await;

        if products.iter().any(|p| p.is_identified_by(product.id())) {
            return Err(ProductError::DuplicateId(product.id().clone()).into());
        }

        products.push(product.clone());
        debug!(product_id = %product.id(), size = products.len(), "Product appended");

        Ok(())
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> AppResult<Option<Vec<Product>>> {
        let mut products = self.products.write().await;

        let Some(product) = products.iter_mut().find(|p| p.is_identified_by(id)) else {
            return Ok(None);
        };
        product.apply(patch);

        Ok(Some(products.clone()))
    }

    async fn delete(&self, id: &ProductId) -> AppResult<DeleteOutcome> {
        let mut products = self.products.write().await;

        let before = products.len();
        products.retain(|p| !p.is_identified_by(id));

        Ok(DeleteOutcome {
            removed: before - products.len(),
            remaining: products.clone(),
        })
    }
}
