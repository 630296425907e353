use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    club_event::event::DeleteClubEvent,
    id::{ClubId, EventId},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::club_event::{
    ClubEventResponse, CreateClubEventRequest, CreateClubEventRequestWithClubId,
    CreatedClubEventResponse,
};

pub async fn register_club_event(
    Path(club_id): Path<ClubId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateClubEventRequest>,
) -> AppResult<(StatusCode, Json<CreatedClubEventResponse>)> {
    req.validate(&())?;
    if req.end_time < req.start_time {
        return Err(AppError::UnprocessableEntity(
            "event must not end before it starts".into(),
        ));
    }

    let create_event = CreateClubEventRequestWithClubId::new(club_id, req);
    registry
        .club_event_repository()
        .create(create_event.into())
        .await
        .map(|id| (StatusCode::CREATED, Json(CreatedClubEventResponse { id })))
}

pub async fn show_club_event_refs(
    Path(club_id): Path<ClubId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<EventId>>> {
    registry
        .club_event_repository()
        .find_refs_by_club(&club_id)
        .await
        .map(Json)
}

pub async fn show_club_event(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ClubEventResponse>> {
    registry
        .club_event_repository()
        .find_by_id(&event_id)
        .await
        .and_then(|event| match event {
            Some(event) => Ok(Json(event.into())),
            None => Err(AppError::EntityNotFound(format!("event {event_id} not found"))),
        })
}

pub async fn delete_club_event(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .club_event_repository()
        .delete(DeleteClubEvent::new(event_id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
