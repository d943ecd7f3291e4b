//! 通用工具函数

use uuid::Uuid;

/// 生成新的 UUID v4（随机）
pub fn random_id() -> Uuid {
    Uuid::new_v4()
}
