//! Users-related HTTP API.
pub mod create;
pub mod get;
pub mod update;

use axum::Router;
use axum::routing::{get, post};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // `POST /api/users` goes to `create`.
        .route("/api/users", post(create::handler))
        // `GET /api/users/email?email=` goes to `get::by_email`.
        .route("/api/users/email", get(get::by_email))
        // `GET /api/users/:ID` goes to `get::by_id`.
        // `PUT /api/users/:ID` goes to `update`.
        .route("/api/users/{id}", get(get::by_id).put(update::handler))
}
