use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One `OrderProducts` row, keyed by the owning order's id.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct OrderProduct {
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub product_price: f64,
}
