//! Handlers for the people catalog and the friendship surface.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use filmgraph_core::model::person::{CreatePerson, UpdatePerson};
use filmgraph_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/people
pub async fn list_people(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let people = state.people.all().await?;
    Ok(Json(DataResponse { data: people }))
}

/// POST /api/v1/people
pub async fn create_person(
    State(state): State<AppState>,
    Json(input): Json<CreatePerson>,
) -> AppResult<impl IntoResponse> {
    let person = state.people.create(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: person })))
}

/// GET /api/v1/people/{id}
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let person = state.people.get(id).await?;
    Ok(Json(DataResponse { data: person }))
}

/// PUT /api/v1/people/{id}
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePerson>,
) -> AppResult<impl IntoResponse> {
    let person = state.people.update(id, input).await?;
    Ok(Json(DataResponse { data: person }))
}

/// DELETE /api/v1/people/{id}
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.people.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/people/{id}/friends
pub async fn list_friends(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let friends = state.people.friends(id).await?;
    Ok(Json(DataResponse { data: friends }))
}

/// GET /api/v1/people/{id}/friends/common/{other_id}
pub async fn common_friends(
    State(state): State<AppState>,
    Path((id, other_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let friends = state.people.common_friends(id, other_id).await?;
    Ok(Json(DataResponse { data: friends }))
}

/// PUT /api/v1/people/{id}/friends/{friend_id}
pub async fn add_friend(
    State(state): State<AppState>,
    Path((id, friend_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    state.people.add_friend(id, friend_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/people/{id}/friends/{friend_id}
pub async fn remove_friend(
    State(state): State<AppState>,
    Path((id, friend_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    state.people.remove_friend(id, friend_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
