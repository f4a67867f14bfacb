use crate::{
    abstract_trait::CommandHandlerTrait,
    command::{CommandOutcome, DeleteOrder, GetOrderById, OrderCommand, SaveOrder, UpdateOrder},
    model::order::Order as OrderModel,
};
use async_trait::async_trait;
use shared::{config::StoreConnection, errors::RepositoryError};
use tracing::{debug, error, info};

/// Executes header-row statements only; product rows are the repository's
/// concern. The caller supplies the connection, so a multi-statement
/// operation keeps every statement on one transaction.
#[derive(Debug, Default)]
pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    async fn save_order(
        &self,
        conn: &mut StoreConnection,
        cmd: SaveOrder,
    ) -> Result<CommandOutcome, RepositoryError> {
        let result = sqlx::query("INSERT INTO Orders (TotalAmount) VALUES (?1)")
            .bind(cmd.total_amount)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to insert order header: {err:?}");
                RepositoryError::database("failed to save order", err)
            })?;

        let order_id = result.last_insert_rowid();
        info!("✅ Inserted order header ID {order_id}");
        Ok(CommandOutcome::Saved { order_id })
    }

    async fn get_order_by_id(
        &self,
        conn: &mut StoreConnection,
        cmd: GetOrderById,
    ) -> Result<CommandOutcome, RepositoryError> {
        let order = sqlx::query_as::<_, OrderModel>(
            "SELECT Id AS id, TotalAmount AS total_amount FROM Orders WHERE Id = ?1",
        )
        .bind(cmd.order_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch order header {}: {err:?}", cmd.order_id);
            RepositoryError::database("failed to retrieve order", err)
        })?;

        Ok(CommandOutcome::Fetched { order })
    }

    async fn update_order(
        &self,
        conn: &mut StoreConnection,
        cmd: UpdateOrder,
    ) -> Result<CommandOutcome, RepositoryError> {
        let result = sqlx::query("UPDATE Orders SET TotalAmount = ?2 WHERE Id = ?1")
            .bind(cmd.order_id)
            .bind(cmd.total_amount)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update order header {}: {err:?}", cmd.order_id);
                RepositoryError::database("failed to update order", err)
            })?;

        Ok(CommandOutcome::Updated {
            rows_affected: result.rows_affected(),
        })
    }

    async fn delete_order(
        &self,
        conn: &mut StoreConnection,
        cmd: DeleteOrder,
    ) -> Result<CommandOutcome, RepositoryError> {
        let result = sqlx::query("DELETE FROM Orders WHERE Id = ?1")
            .bind(cmd.order_id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete order header {}: {err:?}", cmd.order_id);
                RepositoryError::database("failed to delete order", err)
            })?;

        Ok(CommandOutcome::Deleted {
            rows_affected: result.rows_affected(),
        })
    }
}

#[async_trait]
impl CommandHandlerTrait for CommandHandler {
    async fn handle(
        &self,
        conn: &mut StoreConnection,
        command: OrderCommand,
    ) -> Result<CommandOutcome, RepositoryError> {
        debug!("Dispatching {}", command.name());

        match command {
            OrderCommand::Save(cmd) => self.save_order(conn, cmd).await,
            OrderCommand::GetById(cmd) => self.get_order_by_id(conn, cmd).await,
            OrderCommand::Update(cmd) => self.update_order(conn, cmd).await,
            OrderCommand::Delete(cmd) => self.delete_order(conn, cmd).await,
        }
    }
}
