use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{club::event::DeleteClub, id::ClubId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::club::{
    ClubListQuery, ClubResponse, ClubsResponse, CreateClubRequest, CreatedClubResponse,
};

pub async fn register_club(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateClubRequest>,
) -> AppResult<(StatusCode, Json<CreatedClubResponse>)> {
    req.validate(&())?;

    registry
        .club_repository()
        .create(req.into())
        .await
        .map(|id| (StatusCode::CREATED, Json(CreatedClubResponse { id })))
}

pub async fn show_club_list(
    Query(query): Query<ClubListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ClubsResponse>> {
    query.validate(&())?;

    let repository = registry.club_repository();
    let clubs = match query.name {
        Some(name) => repository.find_by_name(&name).await?,
        None => repository.find_all().await?,
    };
    Ok(Json(clubs.into()))
}

pub async fn show_club(
    Path(club_id): Path<ClubId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ClubResponse>> {
    registry
        .club_repository()
        .find_by_id(&club_id)
        .await
        .and_then(|club| match club {
            Some(club) => Ok(Json(club.into())),
            None => Err(AppError::EntityNotFound(format!("club {club_id} not found"))),
        })
}

pub async fn delete_club(
    Path(club_id): Path<ClubId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .club_repository()
        .delete(DeleteClub::new(club_id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
