//! product-store Service - 内存商品库 HTTP 服务

use std::sync::Arc;

use product_store::api::product_routes;
use product_store::application::ServiceHandler;
use product_store::infrastructure::persistence::InMemoryProductRepository;
use shop_bootstrap::run_http;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    run_http(&config_dir, |config| async move {
        info!("Initializing product-store Service...");

        let repo = if config.store.seed {
            InMemoryProductRepository::seeded()
        } else {
            InMemoryProductRepository::new()
        };
        info!(seeded = config.store.seed, "Repository initialized");

        let handler = Arc::new(ServiceHandler::new(Arc::new(repo)));

        Ok(product_routes(handler))
    })
    .await
}
