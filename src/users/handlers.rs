use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{
    dto::{MessageResponse, Pagination, UserDetail, UserUpdate},
    repo_types::UserChanges,
    service,
};
use crate::{auth::extractors::CurrentUser, error::ApiError, state::AppState};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/me", get(get_me).put(update_me).delete(delete_me))
        .route("/users/:id", get(get_user))
}

#[instrument(skip(state, _current))]
pub async fn list_users(
    State(state): State<AppState>,
    _current: CurrentUser,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<UserDetail>>, ApiError> {
    let users = service::list_users(&state.db, p.skip, p.limit).await?;
    Ok(Json(users.into_iter().map(UserDetail::from).collect()))
}

#[instrument(skip_all)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<UserDetail> {
    Json(UserDetail::from(user))
}

#[instrument(skip(state, current, payload))]
pub async fn update_me(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<UserDetail>, ApiError> {
    let changes: UserChanges = payload.into();
    let updated = service::update_user(&state.db, &current.0, &changes).await?;
    info!(user_id = %updated.id, "profile updated");
    Ok(Json(UserDetail::from(updated)))
}

#[instrument(skip(state, current))]
pub async fn delete_me(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<MessageResponse>, ApiError> {
    service::delete_user(&state.db, current.0.id).await?;
    info!(user_id = %current.0.id, username = %current.0.username, "account deleted");
    Ok(Json(MessageResponse {
        message: "user deleted".into(),
    }))
}

#[instrument(skip(state, _current))]
pub async fn get_user(
    State(state): State<AppState>,
    _current: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<UserDetail>, ApiError> {
    let user = service::get_user_by_id(&state.db, id).await?;
    Ok(Json(UserDetail::from(user)))
}
