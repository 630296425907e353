use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser},
        User,
    },
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    // Store-assigned id. A failed write is reported as `AppError::Unavailable`.
    async fn create(&self, event: CreateUser) -> AppResult<UserId>;
    async fn create_with_id(&self, user_id: UserId, event: CreateUser) -> AppResult<UserId>;
    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>>;
    async fn delete(&self, event: DeleteUser) -> AppResult<()>;
}
