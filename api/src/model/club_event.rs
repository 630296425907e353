use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    club_event::{event::CreateClubEvent, ClubEvent},
    id::{ClubId, EventId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubEventRequest {
    #[garde(length(min = 1, max = 120))]
    pub name: String,
    #[garde(length(max = 5000))]
    #[serde(default)]
    pub description: String,
    #[garde(length(max = 200))]
    #[serde(default)]
    pub location: String,
    #[garde(skip)]
    pub start_time: DateTime<Utc>,
    #[garde(skip)]
    pub end_time: DateTime<Utc>,
}

#[derive(new)]
pub struct CreateClubEventRequestWithClubId(ClubId, CreateClubEventRequest);

impl From<CreateClubEventRequestWithClubId> for CreateClubEvent {
    fn from(value: CreateClubEventRequestWithClubId) -> Self {
        let CreateClubEventRequestWithClubId(
            host_club,
            CreateClubEventRequest {
                name,
                description,
                location,
                start_time,
                end_time,
            },
        ) = value;
        CreateClubEvent {
            host_club,
            name,
            description,
            location,
            start_time,
            end_time,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubEventResponse {
    pub id: EventId,
    pub host_club: ClubId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<ClubEvent> for ClubEventResponse {
    fn from(value: ClubEvent) -> Self {
        let ClubEvent {
            id,
            host_club,
            name,
            description,
            location,
            start_time,
            end_time,
        } = value;
        Self {
            id,
            host_club,
            name,
            description,
            location,
            start_time,
            end_time,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedClubEventResponse {
    pub id: EventId,
}
