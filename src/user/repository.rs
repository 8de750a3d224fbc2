//! Handle user persistence.

use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tokio::sync::RwLock;

use crate::error::{Result, ServerError};
use crate::user::{NewUser, User};

/// Port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by its identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Find a user by its email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Save a new user and assign it an identifier.
    async fn insert(&self, user: NewUser) -> Result<User>;

    /// Save an existing user.
    async fn update(&self, user: User) -> Result<User>;
}

/// PostgreSQL user repository.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: Pool<Postgres>,
}

impl PgUserRepository {
    /// Create a new [`PgUserRepository`].
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Turn unique constraint violations on `email` into `conflict`.
fn on_unique_violation(
    err: sqlx::Error,
    conflict: impl FnOnce() -> ServerError,
) -> ServerError {
    let err = ServerError::from(err);
    if err.is_unique_violation() {
        conflict()
    } else {
        err
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(sqlx::query_as::<_, User>(
            r#"SELECT id, full_name, email FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(sqlx::query_as::<_, User>(
            r#"SELECT id, full_name, email FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (full_name, email)
                VALUES ($1, $2)
                RETURNING id, full_name, email"#,
        )
        .bind(&user.full_name)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            on_unique_violation(err, || ServerError::EmailExists(user.email.clone()))
        })
    }

    async fn update(&self, user: User) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"UPDATE users
                SET full_name = $2, email = $3
                WHERE id = $1
                RETURNING id, full_name, email"#,
        )
        .bind(user.id)
        .bind(&user.full_name)
        .bind(&user.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            on_unique_violation(err, || {
                ServerError::EmailUsedByOther(user.email.clone())
            })
        })?
        .ok_or(ServerError::UserNotFoundById(user.id))
    }
}

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    users: BTreeMap<i64, User>,
}

impl Store {
    fn owner_of(&self, email: &str) -> Option<&User> {
        self.users.values().find(|user| user.email == email)
    }
}

/// In-process user repository.
///
/// Identifiers start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    store: RwLock<Store>,
}

impl MemoryUserRepository {
    /// Create an empty [`MemoryUserRepository`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saved users.
    pub async fn len(&self) -> usize {
        self.store.read().await.users.len()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.store.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.store.read().await.owner_of(email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        let mut store = self.store.write().await;
        if store.owner_of(&user.email).is_some() {
            return Err(ServerError::EmailExists(user.email));
        }

        store.last_id += 1;
        let user = User {
            id: store.last_id,
            full_name: user.full_name,
            email: user.email,
        };
        store.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User> {
        let mut store = self.store.write().await;
        if store
            .owner_of(&user.email)
            .is_some_and(|owner| owner.id != user.id)
        {
            return Err(ServerError::EmailUsedByOther(user.email));
        }

        match store.users.get_mut(&user.id) {
            Some(saved) => {
                saved.clone_from(&user);
                Ok(user)
            },
            None => Err(ServerError::UserNotFoundById(user.id)),
        }
    }
}
