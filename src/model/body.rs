use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body used to register or update a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserBody {
    /// User's full name.
    #[schema(example = "Alice Smith", min_length = 3, max_length = 20)]
    #[validate(
        custom(function = "crate::model::not_blank", message = "Username is mandatory"),
        length(
            min = 3,
            max = 20,
            message = "Username must be between 3 and 20 characters"
        )
    )]
    pub username: String,
    /// User email, unique across users.
    #[schema(example = "alice@example.com")]
    #[validate(
        custom(function = "crate::model::not_blank", message = "Email is mandatory"),
        email(message = "Email is not valid")
    )]
    pub email: String,
}
