use kernel::model::{
    club::{event::CreateClub, Club},
    id::{ClubId, EventId},
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

use crate::{repository::EVENT_COLLECTION, store::DocumentPath};

#[derive(Debug, Serialize, Deserialize)]
pub struct ClubDocument {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    // Paths of the form `Events/{id}`.
    #[serde(default)]
    pub events: Vec<String>,
}

impl From<CreateClub> for ClubDocument {
    fn from(value: CreateClub) -> Self {
        let CreateClub {
            name,
            description,
            categories,
            image_url,
        } = value;
        Self {
            name,
            description,
            categories,
            image_url,
            events: Vec::new(),
        }
    }
}

impl ClubDocument {
    pub fn into_club(self, id: ClubId) -> AppResult<Club> {
        let ClubDocument {
            name,
            description,
            categories,
            image_url,
            events,
        } = self;
        let events = events
            .iter()
            .map(String::as_str)
            .map(event_id_from_ref)
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Club {
            id,
            name,
            description,
            categories,
            image_url,
            events,
        })
    }
}

pub fn event_ref(event_id: &EventId) -> String {
    DocumentPath::new(EVENT_COLLECTION, event_id.as_str()).to_string()
}

fn event_id_from_ref(reference: &str) -> AppResult<EventId> {
    let path: DocumentPath = reference.parse()?;
    if path.collection() != EVENT_COLLECTION {
        return Err(AppError::ConversionEntityError(format!(
            "{reference} does not point into {EVENT_COLLECTION}"
        )));
    }
    Ok(EventId::new(path.id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_refs_round_trip_through_paths() {
        let id = EventId::new("e42");
        assert_eq!(event_ref(&id), "Events/e42");
        assert_eq!(event_id_from_ref("Events/e42").unwrap(), id);
        assert!(event_id_from_ref("Clubs/e42").is_err());
    }
}
