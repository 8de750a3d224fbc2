use std::sync::Arc;

use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::error::{Result, ServerError};
use crate::model::body::UserBody;
use crate::model::response::UserResponse;
use crate::user::{NewUser, User, UserRepository, apply};

/// User manager.
///
/// Holds no state between calls: every operation reads from the
/// repository again.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new [`UserService`].
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Register a new user after checking its email is unused.
    pub async fn register(&self, body: UserBody) -> Result<UserResponse> {
        body.validate()?;
        self.ensure_email_unused(&body.email).await?;

        let user = self.repo.insert(NewUser::from(body)).await?;

        metrics::counter!("users_registered_total").increment(1);
        tracing::info!(user_id = user.id, "user registered");

        Ok(user.into())
    }

    /// Get a user using its email address.
    pub async fn get_by_email(&self, email: &str) -> Result<UserResponse> {
        validate_email(email)?;

        Ok(self.find_by_email(email).await?.into())
    }

    /// Get a user using its identifier.
    pub async fn get_by_id(&self, id: i64) -> Result<UserResponse> {
        Ok(self.find_by_id(id).await?.into())
    }

    /// Update full name and email of an existing user.
    ///
    /// Keeping the current email is not a conflict.
    pub async fn update_by_id(
        &self,
        id: i64,
        body: UserBody,
    ) -> Result<UserResponse> {
        body.validate()?;

        let mut user = self.find_by_id(id).await?;
        self.ensure_email_unused_by_other(id, &body.email).await?;

        apply(body, &mut user);
        let user = self.repo.update(user).await?;

        metrics::counter!("users_updated_total").increment(1);
        tracing::info!(user_id = user.id, "user updated");

        Ok(user.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServerError::UserNotFoundById(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<User> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServerError::UserNotFoundByEmail(email.to_owned()))
    }

    async fn ensure_email_unused(&self, email: &str) -> Result<()> {
        if self.repo.find_by_email(email).await?.is_some() {
            tracing::debug!(%email, "registration refused, email taken");
            return Err(ServerError::EmailExists(email.to_owned()));
        }

        Ok(())
    }

    async fn ensure_email_unused_by_other(
        &self,
        user_id: i64,
        email: &str,
    ) -> Result<()> {
        match self.repo.find_by_email(email).await? {
            Some(owner) if owner.id != user_id => {
                tracing::debug!(user_id, owner_id = owner.id, "update refused, email taken");
                Err(ServerError::EmailUsedByOther(email.to_owned()))
            },
            _ => Ok(()),
        }
    }
}

fn validate_email(email: &str) -> Result<()> {
    if email.validate_email() {
        return Ok(());
    }

    let mut errors = ValidationErrors::new();
    errors.add(
        "email",
        ValidationError::new("email").with_message("Email is not valid".into()),
    );
    Err(errors.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::MemoryUserRepository;

    fn body(username: &str, email: &str) -> UserBody {
        UserBody {
            username: username.into(),
            email: email.into(),
        }
    }

    fn service() -> (UserService, Arc<MemoryUserRepository>) {
        let repo = Arc::new(MemoryUserRepository::new());
        (UserService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_register_then_get() {
        let (users, _) = service();

        let created = users
            .register(body("Alice Smith", "alice@example.com"))
            .await
            .unwrap();
        assert_eq!(
            created,
            UserResponse {
                id: 1,
                full_name: "Alice Smith".into(),
                email: "alice@example.com".into(),
            }
        );

        assert_eq!(users.get_by_id(created.id).await.unwrap(), created);
        assert_eq!(
            users.get_by_email("alice@example.com").await.unwrap(),
            created
        );
    }

    #[tokio::test]
    async fn test_register_twice_conflicts() {
        let (users, repo) = service();
        users
            .register(body("Alice Smith", "alice@example.com"))
            .await
            .unwrap();

        let err = users
            .register(body("Bob", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::EmailExists(email) if email == "alice@example.com"));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_register_invalid_body() {
        let (users, repo) = service();

        let err = users.register(body("Al", "alice")).await.unwrap_err();
        match err {
            ServerError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("username"));
                assert!(errors.field_errors().contains_key("email"));
            },
            err => panic!("unexpected error: {err}"),
        }
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_unknown_keys() {
        let (users, _) = service();

        assert!(matches!(
            users.get_by_id(1).await.unwrap_err(),
            ServerError::UserNotFoundById(1)
        ));
        assert!(matches!(
            users.get_by_email("nobody@example.com").await.unwrap_err(),
            ServerError::UserNotFoundByEmail(_)
        ));
        assert!(matches!(
            users.get_by_email("nobody").await.unwrap_err(),
            ServerError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_update_unknown_user() {
        let (users, repo) = service();

        let err = users
            .update_by_id(3, body("Alice Smith", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::UserNotFoundById(3)));
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_update_to_other_users_email() {
        let (users, _) = service();
        let alice = users
            .register(body("Alice Smith", "alice@example.com"))
            .await
            .unwrap();
        users
            .register(body("Bob", "bob@example.com"))
            .await
            .unwrap();

        let err = users
            .update_by_id(alice.id, body("Alice S.", "bob@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::EmailUsedByOther(_)));
        assert_eq!(users.get_by_id(alice.id).await.unwrap(), alice);
    }

    #[tokio::test]
    async fn test_update_keeping_own_email() {
        let (users, _) = service();
        let alice = users
            .register(body("Alice Smith", "alice@example.com"))
            .await
            .unwrap();

        let updated = users
            .update_by_id(alice.id, body("Alice S.", "alice@example.com"))
            .await
            .unwrap();
        assert_eq!(updated.id, alice.id);
        assert_eq!(updated.full_name, "Alice S.");
        assert_eq!(users.get_by_id(alice.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_changes_email() {
        let (users, _) = service();
        let alice = users
            .register(body("Alice Smith", "alice@example.com"))
            .await
            .unwrap();

        users
            .update_by_id(alice.id, body("Alice Smith", "smith@example.com"))
            .await
            .unwrap();

        assert!(matches!(
            users.get_by_email("alice@example.com").await.unwrap_err(),
            ServerError::UserNotFoundByEmail(_)
        ));
        assert_eq!(
            users.get_by_email("smith@example.com").await.unwrap().id,
            alice.id
        );
        // Old email is free again.
        users
            .register(body("Someone", "alice@example.com"))
            .await
            .unwrap();
    }
}
