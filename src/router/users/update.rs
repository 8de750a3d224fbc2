//! Update user data.

use axum::Json;
use axum::extract::State;

use crate::error::{ResponseError, Result};
use crate::model::body::UserBody;
use crate::model::response::UserResponse;
use crate::router::{UserId, Valid};
use crate::user::UserService;

/// Update an existing user.
///
/// Updates a user's full name and email by their ID.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "ID of the user to be updated", example = 1)),
    request_body = UserBody,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, description = "Invalid input data", body = ResponseError),
        (status = 404, description = "User not found", body = ResponseError),
        (status = 409, description = "Email already in use by another user", body = ResponseError)
    ),
    tag = "User",
    operation_id = "updateUserById"
)]
pub async fn handler(
    State(users): State<UserService>,
    UserId(id): UserId,
    Valid(body): Valid<UserBody>,
) -> Result<Json<UserResponse>> {
    Ok(Json(users.update_by_id(id, body).await?))
}
