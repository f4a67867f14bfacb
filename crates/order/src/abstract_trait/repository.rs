use crate::domain::Order;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderRepository = Arc<dyn OrderRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderRepositoryTrait {
    /// Persists the aggregate and assigns the storage-generated id onto
    /// `order.id`.
    async fn save_order(&self, order: &mut Order) -> Result<(), RepositoryError>;

    /// Reconstructs the full aggregate, or `None` when no header row exists.
    async fn get_order_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError>;

    /// Updates the header and replaces the stored product set with the
    /// supplied one.
    async fn update_order(&self, order: &Order) -> Result<(), RepositoryError>;

    /// Removes the order's product rows and header as one unit.
    async fn delete_order(&self, order_id: i64) -> Result<(), RepositoryError>;
}
