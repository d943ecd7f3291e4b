//! 商品仓储接口

use async_trait::async_trait;
use shop_errors::AppResult;

use crate::domain::entities::{Product, ProductPatch};
use crate::domain::value_objects::ProductId;

/// 删除结果
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    /// 被删除的记录数（0 或 1）
    pub removed: usize,
    /// 删除后剩余的集合
    pub remaining: Vec<Product>,
}

/// 商品仓储接口
///
/// 集合是有序的；写操作返回的快照与该次写入处于同一临界区内。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 按当前顺序返回全部商品
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>>;

    /// 追加到集合末尾，ID 已存在时返回 Conflict
    async fn insert(&self, product: &Product) -> AppResult<()>;

    /// 原地合并部分更新，返回更新后的完整集合；ID 不存在时返回 `None`
    async fn update(&self, id: &ProductId, patch: &ProductPatch)
        -> AppResult<Option<Vec<Product>>>;

    /// 删除匹配的商品（不存在时不报错）
    async fn delete(&self, id: &ProductId) -> AppResult<DeleteOutcome>;
}
