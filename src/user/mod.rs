mod mapper;
mod repository;
mod service;

pub use mapper::*;
pub use repository::*;
pub use service::*;

use serde::{Deserialize, Serialize};

/// User as saved on database.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
}

/// [`User`] not yet persisted, without identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
}
