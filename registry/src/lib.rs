use std::sync::Arc;

use adapter::repository::{
    club::ClubRepositoryImpl, club_event::ClubEventRepositoryImpl,
    health::HealthCheckRepositoryImpl, session::SessionRepositoryImpl, user::UserRepositoryImpl,
};
use adapter::store::DocumentStore;
use kernel::repository::{
    club::ClubRepository, club_event::ClubEventRepository, health::HealthCheckRepository,
    session::SessionRepository, user::UserRepository,
};
use shared::config::AuthConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    club_repository: Arc<dyn ClubRepository>,
    club_event_repository: Arc<dyn ClubEventRepository>,
    session_repository: Arc<dyn SessionRepository>,
}

impl AppRegistry {
    pub fn new(store: Arc<dyn DocumentStore>, auth_config: &AuthConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(store.clone()));
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(UserRepositoryImpl::new(store.clone()));
        let club_repository = Arc::new(ClubRepositoryImpl::new(store.clone()));
        let club_event_repository = Arc::new(ClubEventRepositoryImpl::new(store));
        let session_repository = Arc::new(SessionRepositoryImpl::new(
            user_repository.clone(),
            auth_config.persist_new_users,
        ));
        Self {
            health_check_repository,
            user_repository,
            club_repository,
            club_event_repository,
            session_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn club_repository(&self) -> Arc<dyn ClubRepository> {
        self.club_repository.clone()
    }

    pub fn club_event_repository(&self) -> Arc<dyn ClubEventRepository> {
        self.club_event_repository.clone()
    }

    pub fn session_repository(&self) -> Arc<dyn SessionRepository> {
        self.session_repository.clone()
    }
}
