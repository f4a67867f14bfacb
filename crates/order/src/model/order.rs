use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One `Orders` header row.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub total_amount: f64,
}
