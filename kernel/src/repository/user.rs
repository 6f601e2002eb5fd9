use crate::model::{
    id::UserId,
    list::ListOptions,
    user::{
        event::{CreateUser, DeleteUser},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

/// Lookups return `None` for absence; translating that into a not-found
/// error is the transport shim's job.
#[cfg_attr(feature = "mockall", mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<User>>;
    // Deletes every owned ticket first, then the user row.
    async fn delete(&self, event: DeleteUser) -> AppResult<()>;
}
