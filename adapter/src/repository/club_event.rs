use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    club_event::{
        event::{CreateClubEvent, DeleteClubEvent},
        ClubEvent,
    },
    id::{ClubId, EventId},
};
use kernel::repository::club_event::ClubEventRepository;
use serde_json::Value;
use shared::error::{AppError, AppResult};

use super::{CLUB_COLLECTION, EVENT_COLLECTION};
use crate::{
    database::model::{club::event_ref, club_event::ClubEventDocument},
    store::{to_document, DocumentPath, DocumentStore, FieldValue, Write},
};

#[derive(new)]
pub struct ClubEventRepositoryImpl {
    store: Arc<dyn DocumentStore>,
}

#[async_trait]
impl ClubEventRepository for ClubEventRepositoryImpl {
    async fn create(&self, event: CreateClubEvent) -> AppResult<EventId> {
        let event_id = EventId::new(self.store.generate_id());
        let event_path = DocumentPath::new(EVENT_COLLECTION, event_id.as_str());
        let club_path = DocumentPath::new(CLUB_COLLECTION, event.host_club.as_str());
        let doc = to_document(&ClubEventDocument::from(event))?;

        // The update fails on a missing club, which also discards the insert.
        self.store
            .commit(vec![
                Write::Set {
                    path: event_path,
                    data: doc,
                },
                Write::Update {
                    path: club_path,
                    fields: vec![(
                        "events".into(),
                        FieldValue::ArrayUnion(vec![Value::String(event_ref(&event_id))]),
                    )],
                },
            ])
            .await?;

        Ok(event_id)
    }

    async fn find_by_id(&self, event_id: &EventId) -> AppResult<Option<ClubEvent>> {
        let snapshot = self
            .store
            .get(&DocumentPath::new(EVENT_COLLECTION, event_id.as_str()))
            .await?;
        Ok(snapshot
            .decode::<ClubEventDocument>()?
            .map(|doc| doc.into_club_event(event_id.clone())))
    }

    async fn delete(&self, event: DeleteClubEvent) -> AppResult<()> {
        // TODO: drop the reference from the host club once dangling refs are
        // confirmed to be unwanted; readers currently have to tolerate them.
        self.store
            .delete(&DocumentPath::new(EVENT_COLLECTION, event.event_id.as_str()))
            .await
    }

    async fn find_refs_by_club(&self, _club_id: &ClubId) -> AppResult<Vec<EventId>> {
        Err(AppError::NotImplemented("event reference lookup"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use kernel::model::club::event::CreateClub;
    use kernel::repository::club::ClubRepository;

    use super::*;
    use crate::{
        repository::club::ClubRepositoryImpl,
        store::{memory::MemoryStore, Query},
    };

    fn blitz_night(host: &str) -> CreateClubEvent {
        let start = Utc.with_ymd_and_hms(2024, 10, 4, 18, 0, 0).unwrap();
        CreateClubEvent::new(
            ClubId::new(host),
            "Blitz Night".into(),
            "Three-minute games, all levels".into(),
            "Student Union 210".into(),
            start,
            start + Duration::hours(2),
        )
    }

    async fn with_club(name: &str) -> anyhow::Result<(Arc<MemoryStore>, ClubRepositoryImpl)> {
        let store = Arc::new(MemoryStore::new());
        let clubs = ClubRepositoryImpl::new(store.clone());
        clubs
            .create(CreateClub::new(name.into(), String::new(), vec![], None))
            .await?;
        Ok((store, clubs))
    }

    #[tokio::test]
    async fn test_create_event_registers_on_host_club() -> anyhow::Result<()> {
        let (store, clubs) = with_club("Chess Club").await?;
        let repo = ClubEventRepositoryImpl::new(store.clone());

        let first = repo.create(blitz_night("Chess Club")).await?;
        let second = repo.create(blitz_night("Chess Club")).await?;
        assert_ne!(first, second);

        let club = clubs.find_by_id(&ClubId::new("Chess Club")).await?.unwrap();
        assert_eq!(club.events, vec![first.clone(), second]);

        let event = repo.find_by_id(&first).await?.unwrap();
        assert_eq!(event.host_club, ClubId::new("Chess Club"));
        assert_eq!(event.name, "Blitz Night");
        assert_eq!(event.end_time - event.start_time, Duration::hours(2));

        assert_eq!(store.query(&Query::collection(EVENT_COLLECTION)).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_event_for_missing_club_writes_nothing() -> anyhow::Result<()> {
        let store = Arc::new(MemoryStore::new());
        let repo = ClubEventRepositoryImpl::new(store.clone());

        let res = repo.create(blitz_night("Ghost Club")).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        assert!(store.query(&Query::collection(EVENT_COLLECTION)).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_event_leaves_club_reference() -> anyhow::Result<()> {
        let (store, clubs) = with_club("Chess Club").await?;
        let repo = ClubEventRepositoryImpl::new(store);

        let event_id = repo.create(blitz_night("Chess Club")).await?;
        repo.delete(DeleteClubEvent::new(event_id.clone())).await?;

        assert!(repo.find_by_id(&event_id).await?.is_none());
        let club = clubs.find_by_id(&ClubId::new("Chess Club")).await?.unwrap();
        assert_eq!(club.events, vec![event_id]);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_refs_by_club_is_not_implemented() -> anyhow::Result<()> {
        let (store, _) = with_club("Chess Club").await?;
        let repo = ClubEventRepositoryImpl::new(store);

        let res = repo.find_refs_by_club(&ClubId::new("Chess Club")).await;
        assert!(matches!(res, Err(AppError::NotImplemented(_))));
        Ok(())
    }
}
