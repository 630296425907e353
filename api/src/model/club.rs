use garde::Validate;
use kernel::model::{
    club::{event::CreateClub, Club},
    id::{ClubId, EventId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubRequest {
    #[garde(length(min = 1, max = 120))]
    pub name: String,
    #[garde(length(max = 5000))]
    #[serde(default)]
    pub description: String,
    #[garde(length(max = 20), inner(length(min = 1, max = 50)))]
    #[serde(default)]
    pub categories: Vec<String>,
    #[garde(url)]
    pub image_url: Option<String>,
}

impl From<CreateClubRequest> for CreateClub {
    fn from(value: CreateClubRequest) -> Self {
        let CreateClubRequest {
            name,
            description,
            categories,
            image_url,
        } = value;
        CreateClub {
            name,
            description,
            categories,
            image_url,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClubListQuery {
    // Name prefix to search for; all clubs are listed when absent.
    #[garde(length(max = 120))]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubResponse {
    pub id: ClubId,
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub image_url: Option<String>,
    pub events: Vec<EventId>,
}

impl From<Club> for ClubResponse {
    fn from(value: Club) -> Self {
        let Club {
            id,
            name,
            description,
            categories,
            image_url,
            events,
        } = value;
        Self {
            id,
            name,
            description,
            categories,
            image_url,
            events,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubsResponse {
    pub items: Vec<ClubResponse>,
}

impl From<Vec<Club>> for ClubsResponse {
    fn from(value: Vec<Club>) -> Self {
        Self {
            items: value.into_iter().map(ClubResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedClubResponse {
    pub id: ClubId,
}
