//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;

use axum::{Router, middleware};
use metrics_exporter_prometheus::PrometheusHandle;
use shop_config::AppConfig;
use shop_errors::AppResult;
use shop_telemetry::init_metrics;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::health::health_routes;
use crate::metrics::{metrics_routes, track_metrics};
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 这是所有 HTTP 服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus recorder（按配置）
/// 4. 调用用户提供的闭包构建业务路由
/// 5. 挂载健康检查、metrics 路由和公共中间件
/// 6. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use shop_bootstrap::run_http;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_http("config", |config| async move {
///         Ok(my_routes(config))
///     }).await
/// }
/// ```
pub async fn run_http<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(AppConfig) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics_handle = if config.telemetry.metrics_enabled {
        Some(init_metrics()?)
    } else {
        None
    };

    // 4. 构建业务路由
    let service_router = router_builder(config.clone()).await?;

    // 5. 组装应用
    let app = build_app(service_router, &config, metrics_handle);

    // 6. 启动服务器
    let listener = TcpListener::bind(config.server.bind_address()).await?;
    let addr = listener.local_addr()?;

    info!(%addr, "server running on port {}", addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}

/// 在业务路由外挂载公共路由与中间件
pub fn build_app(
    service_router: Router,
    config: &AppConfig,
    metrics_handle: Option<PrometheusHandle>,
) -> Router {
    let mut app = service_router.merge(health_routes());

    if let Some(handle) = metrics_handle {
        app = app.merge(metrics_routes(handle));
    }

    let app = app
        .layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http());

    if config.http.cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
