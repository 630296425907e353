use crate::model::id::{ClubId, EventId};
pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub description: String,
    pub categories: Vec<String>,
    pub image_url: Option<String>,
    // Events hosted by this club, in the order they were added.
    pub events: Vec<EventId>,
}
