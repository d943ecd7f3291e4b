//! 启动时写入的示例商品

use crate::domain::entities::{NewProduct, Product};
use crate::domain::value_objects::{Condition, ProductId};

fn product(id: &str, name: &str, desc: &str, price: f64, condition: Condition) -> Product {
    Product::new(
        ProductId::from(id),
        NewProduct {
            name: name.to_string(),
            desc: desc.to_string(),
            price,
            condition,
        },
    )
}

/// 四条示例商品，ID 为 "1".."4"
pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Macbook Pro 2018",
            "13 inch, 8 GB RAM",
            20_000_000.0,
            Condition::New,
        ),
        product(
            "2",
            "Motorola G5S Plus",
            "5.5 inch, 4 GB RAM",
            3_000_000.0,
            Condition::New,
        ),
        product(
            "3",
            "Acer E5 475G",
            "14 inch, 12 GB RAM (upgraded)",
            7_000_000.0,
            Condition::Used,
        ),
        product("4", "iPad 2", "10 inch, 2 GB RAM", 5_000_000.0, Condition::New),
    ]
}
