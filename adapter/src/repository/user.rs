use crate::database::{
    model::{ticket::TicketIdRow, user::UserRow},
    ConnectionPool,
};
use crate::repository::ticket::delete_ticket_scoped;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    list::ListOptions,
    user::{
        event::{CreateUser, DeleteUser},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

/// Argon2id with a per-user salt. The stored value is an opaque credential
/// token; nothing ever reads it back out of the adapter.
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::PasswordHashError(e.to_string()))
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        let hashed_password = hash_password(&event.password)?;

        sqlx::query(
            r#"
                INSERT INTO users (user_id, email, hashed_password, full_name, age, sex)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user_id)
        .bind(&event.email)
        .bind(&hashed_password)
        .bind(&event.full_name)
        .bind(event.age)
        .bind(&event.sex)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match &e {
            // The unique index on email is the backstop behind the transport
            // shim's pre-check.
            sqlx::Error::Database(de) if de.is_unique_violation() => {
                AppError::DuplicateEmail(event.email.clone())
            }
            _ => AppError::SpecificOperationError(e),
        })?;

        let CreateUser {
            email,
            password: _,
            full_name,
            age,
            sex,
        } = event;
        Ok(User {
            user_id,
            email,
            full_name,
            age,
            sex,
        })
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, email, full_name, age, sex
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, email, full_name, age, sex
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, email, full_name, age, sex
                FROM users
                ORDER BY created_at DESC
                LIMIT $1 OFFSET $2
            "#,
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn delete(&self, event: DeleteUser) -> AppResult<()> {
        let owned: Vec<TicketIdRow> = sqlx::query_as(
            r#"
                SELECT ticket_id FROM tickets WHERE owner_id = $1
            "#,
        )
        .bind(event.user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        // Owned tickets go first. The foreign key has no ON DELETE CASCADE;
        // removing the user row while tickets still reference it would fail.
        for row in owned {
            delete_ticket_scoped(self.db.inner_ref(), event.user_id, row.ticket_id).await?;
        }

        let res = sqlx::query(
            r#"
                DELETE FROM users WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            // Absence prior to deletion is validated by the caller, not here.
            tracing::warn!(user_id = %event.user_id, "delete_user matched no rows");
        }
        Ok(())
    }
}
