use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::session::{ProviderIdentity, Session};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn reconcile(&self, identity: ProviderIdentity) -> AppResult<Session>;
}
