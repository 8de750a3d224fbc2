use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique identifier of the user.
    #[schema(example = 1)]
    pub id: i64,
    /// Full name of the user.
    #[schema(example = "Alice Smith")]
    pub full_name: String,
    /// User's email address.
    #[schema(example = "alice@example.com")]
    pub email: String,
}
