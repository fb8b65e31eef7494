use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::{
    AppState,
    entities::movie,
    error::{AppError, AppResult},
    models::MovieRequest,
};

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> AppResult<Json<movie::Model>> {
    let Json(req) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    let created = state.store.create(req).await?;
    Ok(Json(created))
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<movie::Model>>> {
    let movies = state.store.list().await?;
    Ok(Json(movies))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    // The id is checked before the body so a bad path segment wins.
    let Path(id) = path.map_err(|err| AppError::BadRequest(err.body_text()))?;
    let Json(req) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    state.store.update(id, req).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path.map_err(|err| AppError::BadRequest(err.body_text()))?;

    state.store.delete(id).await?;
    Ok(StatusCode::OK)
}
