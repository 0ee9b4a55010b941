use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;
pub mod service;

pub fn router() -> Router<AppState> {
    handlers::user_routes()
}
