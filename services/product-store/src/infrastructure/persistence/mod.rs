//! 持久化实现

mod in_memory_product_repository;
mod seed;

pub use in_memory_product_repository::InMemoryProductRepository;
pub use seed::seed_products;
