use chrono::{DateTime, Utc};

use crate::model::id::{ClubId, EventId};
pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubEvent {
    pub id: EventId,
    pub host_club: ClubId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
