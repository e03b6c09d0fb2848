//! Handlers for the film catalog, likes, and the popularity query.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use filmgraph_core::model::film::{CreateFilm, UpdateFilm};
use filmgraph_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default result count for `GET /films/popular`.
const DEFAULT_POPULAR_COUNT: i64 = 10;

/// Query parameters for `GET /api/v1/films/popular`.
#[derive(Debug, Deserialize)]
pub struct PopularParams {
    /// Maximum results. Defaults to 10.
    pub count: Option<i64>,
}

/// GET /api/v1/films
pub async fn list_films(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let films = state.films.all().await?;
    Ok(Json(DataResponse { data: films }))
}

/// POST /api/v1/films
pub async fn create_film(
    State(state): State<AppState>,
    Json(input): Json<CreateFilm>,
) -> AppResult<impl IntoResponse> {
    let film = state.films.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: film })))
}

/// GET /api/v1/films/popular
pub async fn popular_films(
    State(state): State<AppState>,
    Query(params): Query<PopularParams>,
) -> AppResult<impl IntoResponse> {
    let count = params.count.unwrap_or(DEFAULT_POPULAR_COUNT);
    let films = state.films.popular(count).await?;
    Ok(Json(DataResponse { data: films }))
}

/// GET /api/v1/films/{id}
pub async fn get_film(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let film = state.films.get(id).await?;
    Ok(Json(DataResponse { data: film }))
}

/// PUT /api/v1/films/{id}
pub async fn update_film(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFilm>,
) -> AppResult<impl IntoResponse> {
    let film = state.films.update(id, input).await?;
    Ok(Json(DataResponse { data: film }))
}

/// DELETE /api/v1/films/{id}
pub async fn delete_film(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.films.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/films/{id}/likes
pub async fn list_likers(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let likers = state.films.likers(id).await?;
    Ok(Json(DataResponse { data: likers }))
}

/// PUT /api/v1/films/{id}/likes/{person_id}
pub async fn add_like(
    State(state): State<AppState>,
    Path((id, person_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    state.films.add_like(id, person_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/films/{id}/likes/{person_id}
pub async fn remove_like(
    State(state): State<AppState>,
    Path((id, person_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    state.films.remove_like(id, person_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
