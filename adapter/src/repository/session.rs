use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    session::{ProviderIdentity, Session},
    user::event::CreateUser,
};
use kernel::repository::{session::SessionRepository, user::UserRepository};
use shared::error::AppResult;

/// Reconciles a provider identity with the stored user record on every
/// sign-in.
#[derive(new)]
pub struct SessionRepositoryImpl {
    users: Arc<dyn UserRepository>,
    // When false, first-time identities get a session but no user record.
    persist_new_users: bool,
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn reconcile(&self, identity: ProviderIdentity) -> AppResult<Session> {
        let confirmed_absent = match self.users.find_by_id(&identity.id).await {
            Ok(Some(user)) => return Ok(Session::merged(identity, Some(user))),
            Ok(None) => {
                tracing::info!(user_id = %identity.id, "Unable to find user");
                true
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %identity.id,
                    error.message = %e,
                    "Unable to find user"
                );
                false
            }
        };

        let profile = CreateUser::default_profile(&identity);
        tracing::info!(user_id = %identity.id, ?profile, "Unknown user");

        // Only a record confirmed absent is written.
        if !self.persist_new_users || !confirmed_absent {
            return Ok(Session::merged(identity, None));
        }

        match self
            .users
            .create_with_id(identity.id.clone(), profile.clone())
            .await
        {
            Ok(user_id) => {
                let user = profile.into_user(user_id);
                Ok(Session::merged(identity, Some(user)))
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %identity.id,
                    error.message = %e,
                    "continuing with an unsaved profile"
                );
                Ok(Session::merged(identity, None))
            }
        }
    }
}
