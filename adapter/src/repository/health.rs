use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::repository::health::HealthCheckRepository;

use crate::store::DocumentStore;

#[derive(new)]
pub struct HealthCheckRepositoryImpl {
    store: Arc<dyn DocumentStore>,
}

#[async_trait]
impl HealthCheckRepository for HealthCheckRepositoryImpl {
    async fn check_store(&self) -> bool {
        self.store.ping().await
    }
}
