use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

/// Query used to find a user by email.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Email of the wanted user.
    #[param(example = "alice@example.com")]
    #[validate(email(message = "Email is not valid"))]
    pub email: String,
}
