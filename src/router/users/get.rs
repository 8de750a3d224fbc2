//! Get a user by identifier or email.

use axum::Json;
use axum::extract::State;

use crate::error::{ResponseError, Result};
use crate::model::query::EmailQuery;
use crate::model::response::UserResponse;
use crate::router::{UserId, ValidQuery};
use crate::user::UserService;

/// Get a user by email.
///
/// Retrieves a user from the system using their unique email address.
#[utoipa::path(
    get,
    path = "/api/users/email",
    params(EmailQuery),
    responses(
        (status = 200, description = "User found and returned successfully", body = UserResponse),
        (status = 400, description = "Invalid email format provided", body = ResponseError),
        (status = 404, description = "User not found with the given email", body = ResponseError)
    ),
    tag = "User",
    operation_id = "getUserByEmail"
)]
pub async fn by_email(
    State(users): State<UserService>,
    ValidQuery(query): ValidQuery<EmailQuery>,
) -> Result<Json<UserResponse>> {
    Ok(Json(users.get_by_email(&query.email).await?))
}

/// Get a user by ID.
///
/// Retrieves a user from the system using their unique id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "Unique ID of the user", example = 1)),
    responses(
        (status = 200, description = "User found successfully", body = UserResponse),
        (status = 404, description = "User not found with the provided ID", body = ResponseError)
    ),
    tag = "User",
    operation_id = "getUserById"
)]
pub async fn by_id(
    State(users): State<UserService>,
    UserId(id): UserId,
) -> Result<Json<UserResponse>> {
    Ok(Json(users.get_by_id(id).await?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use serde_json::json;

    use crate::model::response::UserResponse;
    use crate::*;

    async fn register(app: &Router, username: &str, email: &str) -> UserResponse {
        let response = make_request(
            app.clone(),
            Method::POST,
            "/api/users",
            json!({"username": username, "email": email}).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_get_by_id_handler() {
        let app = app(router::state());
        let alice = register(&app, "Alice Smith", "alice@example.com").await;

        let path = format!("/api/users/{}", alice.id);
        let response =
            make_request(app.clone(), Method::GET, &path, String::default()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: UserResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, alice);

        let response =
            make_request(app.clone(), Method::GET, "/api/users/42", String::default())
                .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response =
            make_request(app, Method::GET, "/api/users/abc", String::default()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_by_email_handler() {
        let app = app(router::state());
        let alice = register(&app, "Alice Smith", "alice@example.com").await;

        let response = make_request(
            app.clone(),
            Method::GET,
            "/api/users/email?email=alice@example.com",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: UserResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, alice);

        let response = make_request(
            app.clone(),
            Method::GET,
            "/api/users/email?email=bob@example.com",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = make_request(
            app.clone(),
            Method::GET,
            "/api/users/email?email=not-an-email",
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            make_request(app, Method::GET, "/api/users/email", String::default())
                .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
