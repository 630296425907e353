use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    club::{
        event::{CreateClub, DeleteClub},
        Club,
    },
    id::ClubId,
};
use kernel::repository::club::ClubRepository;
use shared::error::{AppError, AppResult};

use super::CLUB_COLLECTION;
use crate::{
    database::model::club::ClubDocument,
    store::{to_document, DocumentPath, DocumentStore, FilterOp, Query, Snapshot},
};

// Sorts after every character a club name realistically contains, so
// `[prefix, prefix + PREFIX_SENTINEL)` covers all names starting with `prefix`.
const PREFIX_SENTINEL: char = '\u{f8ff}';

#[derive(new)]
pub struct ClubRepositoryImpl {
    store: Arc<dyn DocumentStore>,
}

#[async_trait]
impl ClubRepository for ClubRepositoryImpl {
    async fn create(&self, event: CreateClub) -> AppResult<ClubId> {
        if event.name.trim().is_empty() || event.name.contains('/') {
            return Err(AppError::UnprocessableEntity(format!(
                "invalid club name: {:?}",
                event.name
            )));
        }

        let club_id = ClubId::new(event.name.clone());
        let doc = to_document(&ClubDocument::from(event))?;
        let path = DocumentPath::new(CLUB_COLLECTION, club_id.as_str());
        match self.store.set(&path, doc).await {
            Ok(()) => Ok(club_id),
            Err(e) => {
                tracing::error!(error.message = %e, "failure saving club");
                Err(AppError::Unavailable(format!("failure saving club: {e}")))
            }
        }
    }

    async fn find_by_id(&self, club_id: &ClubId) -> AppResult<Option<Club>> {
        let snapshot = self
            .store
            .get(&DocumentPath::new(CLUB_COLLECTION, club_id.as_str()))
            .await?;
        snapshot
            .decode::<ClubDocument>()?
            .map(|doc| doc.into_club(club_id.clone()))
            .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Club>> {
        let snapshots = self.store.query(&Query::collection(CLUB_COLLECTION)).await?;
        decode_clubs(snapshots).inspect_err(|e| {
            tracing::error!(error.message = %e, "failed to decode club listing");
        })
    }

    async fn find_by_name(&self, query: &str) -> AppResult<Vec<Club>> {
        let name = title_case(query);
        if name.is_empty() {
            return Ok(Vec::new());
        }

        let upper = format!("{name}{PREFIX_SENTINEL}");
        let query = Query::collection(CLUB_COLLECTION)
            .filter("name", FilterOp::GreaterOrEqual, name)
            .filter("name", FilterOp::LessThan, upper)
            .order_by("name");
        let snapshots = self.store.query(&query).await?;
        decode_clubs(snapshots)
    }

    async fn delete(&self, event: DeleteClub) -> AppResult<()> {
        self.store
            .delete(&DocumentPath::new(CLUB_COLLECTION, event.club_id.as_str()))
            .await
    }
}

fn decode_clubs(snapshots: Vec<Snapshot>) -> AppResult<Vec<Club>> {
    let mut clubs = Vec::with_capacity(snapshots.len());
    for snapshot in snapshots {
        if let Some(doc) = snapshot.decode::<ClubDocument>()? {
            clubs.push(doc.into_club(ClubId::new(snapshot.id()))?);
        }
    }
    Ok(clubs)
}

/// Capitalizes the first character of every whitespace-separated word and
/// lowercases the rest. Runs of whitespace collapse to one space.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
