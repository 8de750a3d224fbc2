//! Conversions between wire shapes and [`User`].

use crate::model::body::UserBody;
use crate::model::response::UserResponse;
use crate::user::{NewUser, User};

impl From<UserBody> for NewUser {
    fn from(body: UserBody) -> Self {
        Self {
            full_name: body.username,
            email: body.email,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
        }
    }
}

/// Overwrite mutable fields of `user` with `body`.
pub fn apply(body: UserBody, user: &mut User) {
    user.full_name = body.username;
    user.email = body.email;
}
