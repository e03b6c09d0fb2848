//! Handlers for the MPA rating lookup set.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use filmgraph_core::error::{CoreError, EntityKind};
use filmgraph_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/mpa
pub async fn list_mpa_ratings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let ratings = state.lookup.mpa_ratings().await?;
    Ok(Json(DataResponse { data: ratings }))
}

/// GET /api/v1/mpa/{id}
pub async fn get_mpa_rating(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rating = state
        .lookup
        .mpa(id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(EntityKind::Mpa, id)))?;
    Ok(Json(DataResponse { data: rating }))
}
