use crate::{
    abstract_trait::{DynCommandHandler, OrderRepositoryTrait},
    command::{CommandOutcome, DeleteOrder, GetOrderById, OrderCommand, SaveOrder, UpdateOrder},
    domain::{Order, Product},
    model::order_product::OrderProduct as OrderProductModel,
};
use async_trait::async_trait;
use shared::{
    config::{ConnectionManager, StoreConnection},
    errors::RepositoryError,
};
use sqlx::Connection;
use tracing::{error, info};

/// SQLite-backed order store. Header statements go through the command
/// handler; product rows are written and read here. Save, update and delete
/// each run as one transaction, so a failure in the middle of a multi-table
/// write never leaves a partial order behind.
pub struct SqliteOrderRepository {
    connection_string: String,
    handler: DynCommandHandler,
}

impl SqliteOrderRepository {
    pub fn new(connection_string: impl Into<String>, handler: DynCommandHandler) -> Self {
        Self {
            connection_string: connection_string.into(),
            handler,
        }
    }

    async fn connect(&self, context: &'static str) -> Result<StoreConnection, RepositoryError> {
        ConnectionManager::connect(&self.connection_string)
            .await
            .map_err(|err| {
                error!("❌ Failed to open store connection: {err:?}");
                RepositoryError::database(context, err)
            })
    }

    /// Creates both tables if they are missing. Safe to call before every
    /// save; the statements are no-ops once the schema exists.
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        let mut conn = self.connect("failed to initialize schema").await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS Orders (
                Id INTEGER PRIMARY KEY AUTOINCREMENT,
                TotalAmount REAL
            )
            "#,
        )
        .execute(&mut conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create Orders table: {err:?}");
            RepositoryError::database("failed to initialize schema", err)
        })?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS OrderProducts (
                OrderId INTEGER,
                ProductId INTEGER,
                ProductName TEXT,
                ProductPrice REAL,
                FOREIGN KEY(OrderId) REFERENCES Orders(Id)
            )
            "#,
        )
        .execute(&mut conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create OrderProducts table: {err:?}");
            RepositoryError::database("failed to initialize schema", err)
        })?;

        Ok(())
    }

    async fn insert_products(
        conn: &mut StoreConnection,
        order_id: i64,
        products: &[Product],
        context: &'static str,
    ) -> Result<(), RepositoryError> {
        for product in products {
            sqlx::query(
                "INSERT INTO OrderProducts (OrderId, ProductId, ProductName, ProductPrice) \
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(order_id)
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to insert product {} for order {order_id}: {err:?}",
                    product.id
                );
                RepositoryError::database(context, err)
            })?;
        }

        Ok(())
    }
}

#[async_trait]
impl OrderRepositoryTrait for SqliteOrderRepository {
    async fn save_order(&self, order: &mut Order) -> Result<(), RepositoryError> {
        if order.id != 0 {
            return Err(RepositoryError::InvalidArgument(
                "order already has a storage-assigned id",
            ));
        }

        self.ensure_schema().await?;

        let mut conn = self.connect("failed to save order").await?;
        let mut tx = conn.begin().await.map_err(|err| {
            error!("❌ Failed to begin save transaction: {err:?}");
            RepositoryError::database("failed to save order", err)
        })?;

        let outcome = self
            .handler
            .handle(
                &mut tx,
                OrderCommand::Save(SaveOrder {
                    total_amount: order.total_amount,
                }),
            )
            .await?;

        let order_id = match outcome {
            CommandOutcome::Saved { order_id } => order_id,
            other => return Err(RepositoryError::UnsupportedCommand(other.name().into())),
        };

        Self::insert_products(&mut tx, order_id, &order.products, "failed to save order").await?;

        tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit save transaction: {err:?}");
            RepositoryError::database("failed to save order", err)
        })?;

        // The id becomes visible on the aggregate only once the write is
        // durable.
        order.id = order_id;
        info!(
            "✅ Saved order {} with {} products",
            order.id,
            order.products.len()
        );
        Ok(())
    }

    async fn get_order_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.connect("failed to retrieve order").await?;

        let outcome = self
            .handler
            .handle(
                &mut conn,
                OrderCommand::GetById(GetOrderById { order_id: id }),
            )
            .await?;

        let header = match outcome {
            CommandOutcome::Fetched { order } => order,
            other => return Err(RepositoryError::UnsupportedCommand(other.name().into())),
        };

        let Some(header) = header else {
            info!("📦 Order {id} not found");
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, OrderProductModel>(
            r#"
            SELECT OrderId AS order_id,
                   ProductId AS product_id,
                   ProductName AS product_name,
                   ProductPrice AS product_price
            FROM OrderProducts
            WHERE OrderId = ?1
            ORDER BY rowid
            "#,
        )
        .bind(id)
        .fetch_all(&mut conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch products for order {id}: {err:?}");
            RepositoryError::database("failed to retrieve order", err)
        })?;

        let mut order = Order::with_id(header.id, header.total_amount);
        for row in rows {
            order.add_product(Product::new(
                row.product_id,
                row.product_name,
                row.product_price,
            ));
        }

        info!(
            "📦 Retrieved order {} with {} products",
            order.id,
            order.products.len()
        );
        Ok(Some(order))
    }

    async fn update_order(&self, order: &Order) -> Result<(), RepositoryError> {
        if order.id == 0 {
            return Err(RepositoryError::InvalidArgument("order id is not set"));
        }

        let mut conn = self.connect("failed to update order").await?;
        let mut tx = conn.begin().await.map_err(|err| {
            error!("❌ Failed to begin update transaction: {err:?}");
            RepositoryError::database("failed to update order", err)
        })?;

        let outcome = self
            .handler
            .handle(
                &mut tx,
                OrderCommand::Update(UpdateOrder {
                    order_id: order.id,
                    total_amount: order.total_amount,
                }),
            )
            .await?;

        let rows_affected = match outcome {
            CommandOutcome::Updated { rows_affected } => rows_affected,
            other => return Err(RepositoryError::UnsupportedCommand(other.name().into())),
        };

        if rows_affected == 0 {
            error!("❌ Order {} has no header row to update", order.id);
            return Err(RepositoryError::NotFound);
        }

        // Replace-all: the caller supplies the complete product list.
        sqlx::query("DELETE FROM OrderProducts WHERE OrderId = ?1")
            .bind(order.id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to clear products for order {}: {err:?}",
                    order.id
                );
                RepositoryError::database("failed to update order", err)
            })?;

        Self::insert_products(&mut tx, order.id, &order.products, "failed to update order").await?;

        tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit update transaction: {err:?}");
            RepositoryError::database("failed to update order", err)
        })?;

        info!(
            "🔄 Updated order {} with {} products",
            order.id,
            order.products.len()
        );
        Ok(())
    }

    async fn delete_order(&self, order_id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.connect("failed to delete order").await?;
        let mut tx = conn.begin().await.map_err(|err| {
            error!("❌ Failed to begin delete transaction: {err:?}");
            RepositoryError::database("failed to delete order", err)
        })?;

        // Children first; the schema has no ON DELETE CASCADE.
        sqlx::query("DELETE FROM OrderProducts WHERE OrderId = ?1")
            .bind(order_id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete products for order {order_id}: {err:?}");
                RepositoryError::database("failed to delete order", err)
            })?;

        let outcome = self
            .handler
            .handle(&mut tx, OrderCommand::Delete(DeleteOrder { order_id }))
            .await?;

        let rows_affected = match outcome {
            CommandOutcome::Deleted { rows_affected } => rows_affected,
            other => return Err(RepositoryError::UnsupportedCommand(other.name().into())),
        };

        if rows_affected == 0 {
            // Dropping the transaction rolls the product delete back, so a
            // miss leaves the store untouched.
            error!("❌ Order {order_id} has no header row to delete");
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit delete transaction: {err:?}");
            RepositoryError::database("failed to delete order", err)
        })?;

        info!("🗑️ Deleted order {order_id}");
        Ok(())
    }
}
