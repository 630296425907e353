use axum::{extract::State, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::session::{SessionRequest, SessionResponse};

pub async fn reconcile_session(
    State(registry): State<AppRegistry>,
    Json(req): Json<SessionRequest>,
) -> AppResult<Json<SessionResponse>> {
    req.validate(&())?;

    registry
        .session_repository()
        .reconcile(req.into())
        .await
        .map(SessionResponse::from)
        .map(Json)
}
