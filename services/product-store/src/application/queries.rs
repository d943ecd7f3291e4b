//! Product queries

use crate::domain::value_objects::ProductId;

/// 列表商品查询
#[derive(Debug, Clone, Default)]
pub struct ListProductsQuery;

/// 获取商品查询
#[derive(Debug, Clone)]
pub struct GetProductQuery {
    pub id: ProductId,
}
