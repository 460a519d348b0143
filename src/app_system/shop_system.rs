use std::sync::Arc;

use tracing::{error, info};

use crate::app_system::Config;
use crate::catalog::{mock_customers, mock_products, Catalog, CustomerDirectory};
use crate::clients::SessionClient;
use crate::error::CatalogError;
use crate::session::SessionService;

/// The main application system.
///
/// Builds and validates the read-only catalog and customer directory, starts
/// the session actor, and handles graceful shutdown.
pub struct ShopSystem {
    pub session_client: SessionClient,
    pub catalog: Arc<Catalog>,
    pub customers: Arc<CustomerDirectory>,
    handle: tokio::task::JoinHandle<()>,
}

impl ShopSystem {
    pub fn new(config: Config) -> Result<Self, CatalogError> {
        let catalog = Arc::new(Catalog::new(mock_products())?);
        let customers = Arc::new(CustomerDirectory::new(mock_customers())?);
        info!(
            products = catalog.products().len(),
            customers = customers.customers().len(),
            "Fixtures validated"
        );

        let (service, session_client) =
            SessionService::new(&config, Arc::clone(&catalog), Arc::clone(&customers));
        let handle = tokio::spawn(service.run());

        Ok(Self {
            session_client,
            catalog,
            customers,
            handle,
        })
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        if let Err(e) = self.session_client.shutdown().await {
            error!(error = %e, "Session actor already stopped");
        }
        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }
        info!("System shutdown complete.");
        Ok(())
    }
}
