use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    club::{
        event::{CreateClub, DeleteClub},
        Club,
    },
    id::ClubId,
};

#[async_trait]
pub trait ClubRepository: Send + Sync {
    // Overwrites any club already stored under the same name.
    async fn create(&self, event: CreateClub) -> AppResult<ClubId>;
    async fn find_by_id(&self, club_id: &ClubId) -> AppResult<Option<Club>>;
    async fn find_all(&self) -> AppResult<Vec<Club>>;
    // Case-insensitive prefix match on the club name.
    async fn find_by_name(&self, query: &str) -> AppResult<Vec<Club>>;
    async fn delete(&self, event: DeleteClub) -> AppResult<()>;
}
