use std::str::FromStr;

use sqlx::{ConnectOptions, SqliteConnection, sqlite::SqliteConnectOptions};

pub type StoreConnection = SqliteConnection;

pub struct ConnectionManager;

impl ConnectionManager {
    /// Opens one short-lived connection for a single operation. The database
    /// file is created on first use; callers release the connection by
    /// dropping it.
    pub async fn connect(connection_string: &str) -> Result<StoreConnection, sqlx::Error> {
        // The store does not enforce the OrderId reference; deleting children
        // before the parent is the application's job.
        SqliteConnectOptions::from_str(connection_string)?
            .create_if_missing(true)
            .foreign_keys(false)
            .connect()
            .await
    }
}
