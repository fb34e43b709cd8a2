use std::sync::Arc;

use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use common::types::StatusMessage;
use models::Resource;
use service::ResourceService;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{observability, openapi::ApiDocumented};

pub mod resources;

/// Handler state: the service for the one resource this process serves.
pub struct AppState<R: Resource> {
    pub service: Arc<ResourceService<R>>,
}

impl<R: Resource> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self { service: Arc::clone(&self.service) }
    }
}

impl<R: Resource> AppState<R> {
    pub fn new(service: ResourceService<R>) -> Self {
        Self { service: Arc::new(service) }
    }
}

/// Liveness probe; never touches the store.
pub async fn liveness<R: Resource>() -> Json<StatusMessage> {
    Json(StatusMessage::new(format!("{} service is running", R::NAME)))
}

async fn metrics() -> (StatusCode, String) {
    observability::render()
}

async fn openapi_json<R: ApiDocumented>() -> Json<utoipa::openapi::OpenApi> {
    Json(R::api_doc())
}

/// CRUD routes for `R`, served with and without the trailing slash on the collection.
pub fn resource_routes<R: Resource>() -> Router<AppState<R>> {
    let collection = format!("/{}", R::COLLECTION);
    Router::new()
        .route(&collection, get(resources::list::<R>).post(resources::create::<R>))
        .route(
            &format!("{collection}/"),
            get(resources::list::<R>).post(resources::create::<R>),
        )
        .route(
            &format!("{collection}/:id"),
            get(resources::get_one::<R>)
                .put(resources::update::<R>)
                .delete(resources::delete::<R>),
        )
        .route_layer(middleware::from_fn(observability::track_requests::<R>))
}

/// Build the full application router for resource `R`.
pub fn build_router<R: Resource + ApiDocumented>(state: AppState<R>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(liveness::<R>))
        .route("/metrics", get(metrics))
        .route("/openapi.json", get(openapi_json::<R>))
        .merge(resource_routes::<R>())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
