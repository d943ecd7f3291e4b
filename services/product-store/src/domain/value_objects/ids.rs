//! 强类型 ID 定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use shop_common::random_id;

/// 商品 ID
///
/// 不透明字符串。示例数据使用 "1".."4"，新建商品使用随机 UUID。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    /// 生成新的随机 ID，与已有 ID 无关
    pub fn generate() -> Self {
        Self(random_id().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
