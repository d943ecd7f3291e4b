//! 商品实体

use serde::{Deserialize, Serialize};
use shop_domain_core::Entity;

use crate::domain::value_objects::{Condition, ProductId};

/// 商品实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub desc: String,
    pub price: f64,
    pub condition: Condition,
}

/// 新建商品的字段（ID 由服务端分配）
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub desc: String,
    pub price: f64,
    pub condition: Condition,
}

/// 部分更新：`Some` 覆盖，`None` 保留原值
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub price: Option<f64>,
    pub condition: Option<Condition>,
}

impl Product {
    pub fn new(id: ProductId, fields: NewProduct) -> Self {
        Self {
            id,
            name: fields.name,
            desc: fields.desc,
            price: fields.price,
            condition: fields.condition,
        }
    }

    /// 合并部分更新，ID 不可修改
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(desc) = &patch.desc {
            self.desc = desc.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.desc.is_none() && self.price.is_none() && self.condition.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ipad() -> Product {
        Product::new(
            ProductId::from("4"),
            NewProduct {
                name: "iPad 2".to_string(),
                desc: "10 inch, 2 GB RAM".to_string(),
                price: 5_000_000.0,
                condition: Condition::New,
            },
        )
    }

    #[test]
    fn test_apply_overwrites_only_provided_fields() {
        let mut product = ipad();
        product.apply(&ProductPatch {
            price: Some(999.0),
            ..Default::default()
        });

        assert_eq!(product.price, 999.0);
        assert_eq!(product.id, ProductId::from("4"));
        assert_eq!(product.name, "iPad 2");
        assert_eq!(product.desc, "10 inch, 2 GB RAM");
        assert_eq!(product.condition, Condition::New);
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut product = ipad();
        let patch = ProductPatch::default();
        assert!(patch.is_empty());

        product.apply(&patch);
        assert_eq!(product, ipad());
    }

    #[test]
    fn test_entity_identity() {
        let product = ipad();
        assert!(product.is_identified_by(&ProductId::from("4")));
        assert!(!product.is_identified_by(&ProductId::from("1")));
    }
}
