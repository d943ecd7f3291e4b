//! 商品成色

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 商品成色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// 全新
    #[display("new")]
    New,
    /// 二手
    #[display("used")]
    Used,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Condition::Used).unwrap(), "\"used\"");
        assert_eq!(
            serde_json::from_str::<Condition>("\"new\"").unwrap(),
            Condition::New
        );
        assert!(serde_json::from_str::<Condition>("\"refurbished\"").is_err());
    }
}
