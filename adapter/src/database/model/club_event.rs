use chrono::{DateTime, Utc};
use kernel::model::{
    club_event::{event::CreateClubEvent, ClubEvent},
    id::{ClubId, EventId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ClubEventDocument {
    #[serde(rename = "hostclub")]
    pub host_club: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<CreateClubEvent> for ClubEventDocument {
    fn from(value: CreateClubEvent) -> Self {
        let CreateClubEvent {
            host_club,
            name,
            description,
            location,
            start_time,
            end_time,
        } = value;
        Self {
            host_club: host_club.into(),
            name,
            description,
            location,
            start_time,
            end_time,
        }
    }
}

impl ClubEventDocument {
    pub fn into_club_event(self, id: EventId) -> ClubEvent {
        let ClubEventDocument {
            host_club,
            name,
            description,
            location,
            start_time,
            end_time,
        } = self;
        ClubEvent {
            id,
            host_club: ClubId::new(host_club),
            name,
            description,
            location,
            start_time,
            end_time,
        }
    }
}
