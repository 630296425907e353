use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::session::reconcile_session;

pub fn build_session_routers() -> Router<AppRegistry> {
    Router::new().route("/auth/session", post(reconcile_session))
}
