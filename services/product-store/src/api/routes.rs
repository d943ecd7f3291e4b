//! 商品路由

use std::sync::Arc;

use axum::{Router, routing::get};

use super::handlers::{add_product, delete_product, get_product, get_products, update_product};
use crate::application::ServiceHandler;

pub fn product_routes(handler: Arc<ServiceHandler>) -> Router {
    Router::new()
        .route("/api", get(get_products).post(add_product))
        .route(
            "/api/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(handler)
}
