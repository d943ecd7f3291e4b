//! 实体基础 trait

/// 实体 trait
///
/// 实体由 ID 标识，两个字段完全相同但 ID 不同的实体不是同一个实体。
pub trait Entity {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;

    /// 是否由给定 ID 标识
    fn is_identified_by(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
