//! Handlers for the genre lookup set.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use filmgraph_core::error::{CoreError, EntityKind};
use filmgraph_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/genres
pub async fn list_genres(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = state.lookup.genres().await?;
    Ok(Json(DataResponse { data: genres }))
}

/// GET /api/v1/genres/{id}
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let genre = state
        .lookup
        .genre(id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(EntityKind::Genre, id)))?;
    Ok(Json(DataResponse { data: genre }))
}
