use axum::{
    routing::{delete, get},
    Router,
};
use registry::AppRegistry;

use crate::handler::club_event::{delete_club_event, show_club_event};

pub fn build_club_event_routers() -> Router<AppRegistry> {
    let events_routers = Router::new()
        .route("/:event_id", get(show_club_event))
        .route("/:event_id", delete(delete_club_event));

    Router::new().nest("/events", events_routers)
}
