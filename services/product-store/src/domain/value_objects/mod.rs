//! 值对象

mod condition;
mod ids;

pub use condition::Condition;
pub use ids::ProductId;
