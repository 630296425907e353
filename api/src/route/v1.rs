use axum::Router;
use registry::AppRegistry;

use super::{
    club::build_club_routers, club_event::build_club_event_routers,
    health::build_health_check_routers, session::build_session_routers,
    user::build_user_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_user_routers())
        .merge(build_club_routers())
        .merge(build_club_event_routers())
        .merge(build_session_routers());
    Router::new().nest("/api/v1", router)
}
