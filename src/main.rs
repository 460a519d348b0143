mod app_system;
mod catalog;
mod clients;
mod domain;
mod error;
mod messages;
mod session;

#[cfg(test)]
mod mock_framework;

use tracing::{info, warn, Instrument};

use crate::app_system::{setup_tracing, Config, ShopSystem};
use crate::catalog::CategoryFilter;
use crate::domain::Category;
use crate::session::Tab;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting Pastas Ale storefront session");

    let config = Config::from_env();
    let confirmation_delay = config.confirmation_delay;
    let system = ShopSystem::new(config).map_err(|e| e.to_string())?;
    let client = system.session_client.clone();

    let span = tracing::info_span!("catalog_browsing");
    async {
        client
            .select_category(CategoryFilter::Only(Category::Rellenas))
            .await
            .map_err(|e| e.to_string())?;
        client
            .set_search_term("sorrentinos")
            .await
            .map_err(|e| e.to_string())?;
        let snapshot = client.snapshot().await.map_err(|e| e.to_string())?;
        info!(
            visible = snapshot.visible_products.len(),
            category = ?snapshot.selected_category,
            search = %snapshot.search_term,
            "Catalog filtered"
        );
        if let Some(product) = snapshot.visible_products.first() {
            info!(
                name = %product.name,
                image = %product.image,
                description = %product.description,
                "Top match"
            );
        }

        client
            .select_category(CategoryFilter::All)
            .await
            .map_err(|e| e.to_string())?;
        client.set_search_term("").await.map_err(|e| e.to_string())?;
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("cart_building");
    async {
        client
            .select_customer(Some(1))
            .await
            .map_err(|e| e.to_string())?;
        client.add_product(1).await.map_err(|e| e.to_string())?;
        client.add_product(1).await.map_err(|e| e.to_string())?;
        client.add_product(2).await.map_err(|e| e.to_string())?;

        // Capeletis stock is 10; the 11th add trips the stock banner.
        for _ in 0..11 {
            client.add_product(5).await.map_err(|e| e.to_string())?;
        }
        let snapshot = client.snapshot().await.map_err(|e| e.to_string())?;
        if let Some(notification) = &snapshot.notification {
            warn!(message = %notification.message, "Stock ceiling hit");
        }

        // Step the capeletis back down and drop the tallarines.
        client
            .change_quantity(5, -1)
            .await
            .map_err(|e| e.to_string())?;
        client.remove_line(2).await.map_err(|e| e.to_string())?;
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_review");
    async {
        client
            .select_tab(Tab::Cart)
            .await
            .map_err(|e| e.to_string())?;
        client
            .set_discount_percent(10.0)
            .await
            .map_err(|e| e.to_string())?;
        let snapshot = client.snapshot().await.map_err(|e| e.to_string())?;
        if let Some(customer) = &snapshot.selected_customer {
            info!(customer = %customer.name, "Order assigned");
        }
        for line in &snapshot.lines {
            info!(
                image = %line.image,
                name = %line.name,
                quantity = line.quantity,
                unit = %line.unit,
                price = line.price,
                "Cart line"
            );
        }
        info!(
            subtotal = snapshot.subtotal,
            discount = snapshot.discount_amount,
            total = snapshot.total,
            "Order summary"
        );
        client.place_order().await.map_err(|e| e.to_string())?;
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Wait out the confirmation screen, then show the reset session.
    tokio::time::sleep(confirmation_delay + std::time::Duration::from_millis(200)).await;
    let snapshot = client.snapshot().await.map_err(|e| e.to_string())?;
    info!(
        lines = snapshot.lines.len(),
        discount = snapshot.discount_percent,
        tab = ?snapshot.active_tab,
        flow = ?snapshot.order_flow,
        "Session reset after confirmation"
    );

    // A second order that gets cancelled instead.
    let span = tracing::info_span!("cancelled_order");
    async {
        client.add_product(4).await.map_err(|e| e.to_string())?;
        client.cancel_order().await.map_err(|e| e.to_string())?;
        let snapshot = client.snapshot().await.map_err(|e| e.to_string())?;
        info!(lines = snapshot.lines.len(), "Order cancelled, cart emptied");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Session completed");
    Ok(())
}
