use anyhow::{Context, Result};
use order::{
    di::DependenciesInject,
    domain::{OrderBuilder, Product},
};
use shared::{config::Config, errors::RepositoryError, utils::init_logger};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let deps = setup().await.context("Failed to setup application")?;

    if let Err(err) = run_demo(&deps).await {
        error!("Error: {err}");
        return Err(err.into());
    }

    Ok(())
}

async fn setup() -> Result<DependenciesInject> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("order-service", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;
    info!("Using store at {}", config.database_url);

    let deps = DependenciesInject::new(&config.database_url)
        .await
        .context("Failed to initialize dependency injection container")?;

    info!("✅ Application setup completed successfully.");
    Ok(deps)
}

async fn run_demo(deps: &DependenciesInject) -> Result<(), RepositoryError> {
    let product1 = Product::new(1, "Product A", 10.5);
    let product2 = Product::new(2, "Product B", 20.0);

    let mut order = OrderBuilder::new(0)
        .add_product(product1)
        .add_product(product2)
        .calculate_total()
        .build();

    deps.repository.save_order(&mut order).await?;
    info!(
        "Order {} created with total {}",
        order.id, order.total_amount
    );
    deps.notifier.notify_order_saved(&order);

    match deps.repository.get_order_by_id(order.id).await? {
        Some(retrieved) => info!(
            "Retrieved order {} with total {}",
            retrieved.id, retrieved.total_amount
        ),
        None => info!("Order with id {} not found", order.id),
    }

    let previous_order_id = order.id - 1;
    match deps.repository.get_order_by_id(previous_order_id).await? {
        Some(previous) => info!(
            "Retrieved previous order {} with total {}",
            previous.id, previous.total_amount
        ),
        None => info!("Previous order with id {previous_order_id} not found"),
    }

    Ok(())
}
