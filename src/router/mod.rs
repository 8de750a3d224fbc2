//! HTTP API.
pub mod status;
pub mod users;

use axum::extract::{FromRequest, FromRequestParts, Json, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::ServerError;

/// JSON body validated before reaching handlers.
#[derive(Debug, Clone)]
pub struct Valid<T>(pub T);

impl<T, S> FromRequest<S> for Valid<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Valid(value))
    }
}

/// Query string validated before reaching handlers.
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidQuery(value))
    }
}

/// User identifier taken from the path.
#[derive(Debug, Clone, Copy, serde::Deserialize, axum::extract::FromRequestParts)]
#[serde(transparent)]
#[from_request(via(axum::extract::Path), rejection(ServerError))]
pub struct UserId(pub i64);

/// In-memory state for handler tests.
#[cfg(test)]
pub fn state() -> crate::AppState {
    use std::sync::Arc;

    crate::AppState {
        config: Arc::new(crate::config::Configuration::default()),
        users: crate::user::UserService::new(Arc::new(
            crate::user::MemoryUserRepository::new(),
        )),
        metrics: None,
    }
}
