use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    club_event::{
        event::{CreateClubEvent, DeleteClubEvent},
        ClubEvent,
    },
    id::{ClubId, EventId},
};

#[async_trait]
pub trait ClubEventRepository: Send + Sync {
    /// Stores the event and appends a reference to it on the host club.
    /// Both writes land together or not at all.
    async fn create(&self, event: CreateClubEvent) -> AppResult<EventId>;
    async fn find_by_id(&self, event_id: &EventId) -> AppResult<Option<ClubEvent>>;
    /// Removes the event record only; the host club keeps its reference.
    async fn delete(&self, event: DeleteClubEvent) -> AppResult<()>;
    async fn find_refs_by_club(&self, club_id: &ClubId) -> AppResult<Vec<EventId>>;
}
