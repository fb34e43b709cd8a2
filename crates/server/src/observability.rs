use axum::{
    extract::{MatchedPath, Request},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use models::Resource;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "resource_requests_total",
        "Resource requests handled, by resource, operation and response status",
        &["resource", "operation", "status"]
    )
    .expect("register resource_requests_total")
});

pub static STORE_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "resource_store_errors_total",
        "Store operations that failed with a server error"
    )
    .expect("register resource_store_errors_total")
});

/// Count one handled request.
pub fn record(resource: &str, operation: &str, status: StatusCode) {
    REQUESTS_TOTAL
        .with_label_values(&[resource, operation, status.as_str()])
        .inc();
}

/// Route layer counting every matched request for `R` by its final status,
/// extractor rejections included.
pub async fn track_requests<R: Resource>(req: Request, next: Next) -> Response {
    let path = req.extensions().get::<MatchedPath>().map(|p| p.as_str().to_owned());
    let operation = operation_name(req.method(), path.as_deref());
    let response = next.run(req).await;
    record(R::COLLECTION, operation, response.status());
    response
}

fn operation_name(method: &Method, matched_path: Option<&str>) -> &'static str {
    let on_record = matched_path.is_some_and(|p| p.ends_with("/:id"));
    match *method {
        Method::POST => "create",
        Method::GET if on_record => "get",
        Method::GET => "list",
        Method::PUT => "update",
        Method::DELETE => "delete",
        _ => "other",
    }
}

/// Render the default registry in the text exposition format.
pub fn render() -> (StatusCode, String) {
    Lazy::force(&REQUESTS_TOTAL);
    Lazy::force(&STORE_ERRORS_TOTAL);
    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    if let Err(e) = encoder.encode(&prometheus::gather(), &mut buf) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("encode metrics: {e}"));
    }
    match String::from_utf8(buf) {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics not utf-8: {e}")),
    }
}
