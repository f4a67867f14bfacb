use std::sync::Arc;

use order::{
    abstract_trait::{CommandHandlerTrait, DynCommandHandler},
    command::{
        CommandHandler, CommandOutcome, DeleteOrder, GetOrderById, OrderCommand, SaveOrder,
        UpdateOrder,
    },
    repository::SqliteOrderRepository,
};
use shared::config::{ConnectionManager, StoreConnection};
use tempfile::TempDir;

fn store_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("orders.db").display())
}

async fn connection(dir: &TempDir) -> StoreConnection {
    let handler: DynCommandHandler = Arc::new(CommandHandler::new());
    let repository = SqliteOrderRepository::new(store_url(dir), handler);
    repository.ensure_schema().await.expect("schema bootstrap");

    ConnectionManager::connect(&store_url(dir))
        .await
        .expect("open connection")
}

#[tokio::test]
async fn save_returns_the_generated_header_id() {
    let dir = TempDir::new().expect("temp dir");
    let mut conn = connection(&dir).await;
    let handler = CommandHandler::new();

    let outcome = handler
        .handle(
            &mut conn,
            OrderCommand::Save(SaveOrder { total_amount: 30.5 }),
        )
        .await
        .expect("save");

    let CommandOutcome::Saved { order_id } = outcome else {
        panic!("expected a Saved outcome");
    };
    assert!(order_id > 0);
}

#[tokio::test]
async fn get_fetches_the_header_only() {
    let dir = TempDir::new().expect("temp dir");
    let mut conn = connection(&dir).await;
    let handler = CommandHandler::new();

    let outcome = handler
        .handle(
            &mut conn,
            OrderCommand::Save(SaveOrder { total_amount: 12.0 }),
        )
        .await
        .expect("save");
    let CommandOutcome::Saved { order_id } = outcome else {
        panic!("expected a Saved outcome");
    };

    let outcome = handler
        .handle(&mut conn, OrderCommand::GetById(GetOrderById { order_id }))
        .await
        .expect("get");

    let CommandOutcome::Fetched { order: Some(order) } = outcome else {
        panic!("expected a header row");
    };
    assert_eq!(order.id, order_id);
    assert_eq!(order.total_amount, 12.0);
}

#[tokio::test]
async fn get_of_a_missing_header_is_absent() {
    let dir = TempDir::new().expect("temp dir");
    let mut conn = connection(&dir).await;
    let handler = CommandHandler::new();

    let outcome = handler
        .handle(
            &mut conn,
            OrderCommand::GetById(GetOrderById { order_id: 999 }),
        )
        .await
        .expect("get");

    assert!(matches!(
        outcome,
        CommandOutcome::Fetched { order: None }
    ));
}

#[tokio::test]
async fn update_reports_zero_rows_for_a_missing_header() {
    let dir = TempDir::new().expect("temp dir");
    let mut conn = connection(&dir).await;
    let handler = CommandHandler::new();

    let outcome = handler
        .handle(
            &mut conn,
            OrderCommand::Update(UpdateOrder {
                order_id: 999,
                total_amount: 1.0,
            }),
        )
        .await
        .expect("update");

    assert!(matches!(
        outcome,
        CommandOutcome::Updated { rows_affected: 0 }
    ));
}

#[tokio::test]
async fn delete_reports_zero_rows_for_a_missing_header() {
    let dir = TempDir::new().expect("temp dir");
    let mut conn = connection(&dir).await;
    let handler = CommandHandler::new();

    let outcome = handler
        .handle(
            &mut conn,
            OrderCommand::Delete(DeleteOrder { order_id: 999 }),
        )
        .await
        .expect("delete");

    assert!(matches!(
        outcome,
        CommandOutcome::Deleted { rows_affected: 0 }
    ));
}
