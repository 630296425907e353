use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    club::{delete_club, register_club, show_club, show_club_list},
    club_event::{register_club_event, show_club_event_refs},
};

pub fn build_club_routers() -> Router<AppRegistry> {
    let clubs_routers = Router::new()
        .route("/", post(register_club))
        .route("/", get(show_club_list))
        .route("/:club_id", get(show_club))
        .route("/:club_id", delete(delete_club))
        .route("/:club_id/events", post(register_club_event))
        .route("/:club_id/events", get(show_club_event_refs));

    Router::new().nest("/clubs", clubs_routers)
}
