use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::id::{ClubId, EventId};

#[derive(new, Debug, Clone)]
pub struct CreateClubEvent {
    pub host_club: ClubId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(new, Debug)]
pub struct DeleteClubEvent {
    pub event_id: EventId,
}
