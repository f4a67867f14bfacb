use serde::{Deserialize, Serialize};

/// A line item owned by exactly one order. Immutable once constructed; this
/// layer accepts any price, including non-positive ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}
