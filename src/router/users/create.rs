use axum::{Json, extract::State, http::StatusCode};

use crate::error::{ResponseError, Result};
use crate::model::body::UserBody;
use crate::model::response::UserResponse;
use crate::router::Valid;
use crate::user::UserService;

/// Register a new user.
///
/// Creates a new user and stores it in the database.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserBody,
    responses(
        (status = 201, description = "User successfully created", body = UserResponse),
        (status = 400, description = "Validation failed for user input", body = ResponseError),
        (status = 409, description = "Email already exists in the system", body = ResponseError)
    ),
    tag = "User",
    operation_id = "register"
)]
pub async fn handler(
    State(users): State<UserService>,
    Valid(body): Valid<UserBody>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    Ok((StatusCode::CREATED, Json(users.register(body).await?)))
}
