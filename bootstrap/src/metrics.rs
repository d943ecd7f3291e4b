//! Metrics 模块
//!
//! 提供 HTTP 请求指标采集与 Prometheus 导出

use std::time::Instant;

use axum::{
    Router,
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusHandle;

/// 记录 HTTP 请求
pub fn record_http_request(method: &str, path: &str, status: u16, duration_ms: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_ms", &labels).record(duration_ms);
}

/// 请求指标中间件
///
/// 路径标签使用路由模板（如 `/api/{id}`），未匹配的请求统一记为 `unmatched`。
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64() * 1000.0,
    );

    response
}

/// `/metrics` 路由
pub fn metrics_routes(handle: PrometheusHandle) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(handle)
}

/// Metrics 端点处理器
async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        handle.render(),
    )
}
