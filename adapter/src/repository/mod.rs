pub mod club;
pub mod club_event;
pub mod health;
pub mod session;
pub mod user;

pub const USER_COLLECTION: &str = "Users";
pub const CLUB_COLLECTION: &str = "Clubs";
pub const EVENT_COLLECTION: &str = "Events";

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use shared::error::{AppError, AppResult};

    use crate::store::{DocumentPath, DocumentStore, Query, Snapshot, Write};

    /// Store whose every call fails as if the backend were unreachable.
    pub struct UnreachableStore;

    fn offline() -> AppError {
        AppError::ExternalServiceError("document store is unreachable".into())
    }

    #[async_trait]
    impl DocumentStore for UnreachableStore {
        async fn get(&self, _path: &DocumentPath) -> AppResult<Snapshot> {
            Err(offline())
        }

        async fn query(&self, _query: &Query) -> AppResult<Vec<Snapshot>> {
            Err(offline())
        }

        async fn commit(&self, _writes: Vec<Write>) -> AppResult<()> {
            Err(offline())
        }

        async fn ping(&self) -> bool {
            false
        }
    }
}
