use crate::{
    abstract_trait::{DynCommandHandler, DynOrderNotifier, DynOrderRepository},
    command::CommandHandler,
    notifier::OrderNotifier,
    repository::SqliteOrderRepository,
};
use anyhow::{Context, Result};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub repository: DynOrderRepository,
    pub notifier: DynOrderNotifier,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("repository", &"SqliteOrderRepository")
            .field("notifier", &"OrderNotifier")
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(connection_string: &str) -> Result<Self> {
        let handler: DynCommandHandler = Arc::new(CommandHandler::new());

        let repository = SqliteOrderRepository::new(connection_string, handler);
        repository
            .ensure_schema()
            .await
            .context("failed to initialize order schema")?;

        let repository: DynOrderRepository = Arc::new(repository);
        let notifier: DynOrderNotifier = Arc::new(OrderNotifier::new());

        Ok(Self {
            repository,
            notifier,
        })
    }
}
