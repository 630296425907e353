use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{delete_user, register_user, show_user};

pub fn build_user_routers() -> Router<AppRegistry> {
    let users_routers = Router::new()
        .route("/", post(register_user))
        .route("/:user_id", get(show_user))
        .route("/:user_id", delete(delete_user));

    Router::new().nest("/users", users_routers)
}
