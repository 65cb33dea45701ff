use tracing::info;

use pizza_client::models::DocTarget;
use pizza_client::{init_tracing, Config, HttpPizzaService, PizzaService};

/// Walk the anonymous storefront path: menu, franchise listing, API docs.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_environment()?;
    init_tracing(&config.observability)?;

    info!("Starting pizza-client");
    info!(
        "Service: {}, factory: {}",
        config.service.service_url, config.service.factory_url
    );

    let service = HttpPizzaService::new(&config.service)?;

    let menu = service.menu().await?;
    info!("Menu has {} pizzas", menu.len());
    for item in &menu {
        info!("  {} - {} ({})", item.title, item.price, item.description);
    }

    let franchises = service.list_franchises(0, 10, "*").await?;
    info!(
        "Fetched {} franchises (more: {})",
        franchises.franchises.len(),
        franchises.more
    );
    for franchise in &franchises.franchises {
        info!("  {} with {} stores", franchise.name, franchise.stores.len());
    }

    let docs = service.docs(DocTarget::Service).await?;
    info!("Service exposes {} documented endpoints", docs.endpoints.len());

    Ok(())
}
