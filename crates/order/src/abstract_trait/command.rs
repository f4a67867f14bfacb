use crate::command::{CommandOutcome, OrderCommand};
use async_trait::async_trait;
use shared::{config::StoreConnection, errors::RepositoryError};
use std::sync::Arc;

pub type DynCommandHandler = Arc<dyn CommandHandlerTrait + Send + Sync>;

#[async_trait]
pub trait CommandHandlerTrait {
    /// Executes exactly one command against the supplied connection and
    /// returns its outcome by value.
    async fn handle(
        &self,
        conn: &mut StoreConnection,
        command: OrderCommand,
    ) -> Result<CommandOutcome, RepositoryError>;
}
