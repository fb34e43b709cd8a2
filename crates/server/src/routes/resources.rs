use axum::{
    extract::{Path, State},
    Json,
};
use common::types::StatusMessage;
use models::Resource;
use service::ListParams;

use crate::{
    errors::ApiError,
    extract::{ApiJson, ApiQuery},
    routes::AppState,
};

pub async fn create<R: Resource>(
    State(state): State<AppState<R>>,
    ApiJson(input): ApiJson<R::Create>,
) -> Result<Json<R>, ApiError> {
    Ok(Json(state.service.create(input).await?))
}

pub async fn list<R: Resource>(
    State(state): State<AppState<R>>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<R>>, ApiError> {
    Ok(Json(state.service.list(params).await?))
}

pub async fn get_one<R: Resource>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<R>, ApiError> {
    Ok(Json(state.service.get(&id).await?))
}

pub async fn update<R: Resource>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<R::Create>,
) -> Result<Json<R>, ApiError> {
    Ok(Json(state.service.update(&id, input).await?))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<StatusMessage>, ApiError> {
    state.service.delete(&id).await?;
    Ok(Json(StatusMessage::new(format!("{} deleted successfully", R::NAME))))
}
