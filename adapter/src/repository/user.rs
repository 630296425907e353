use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use super::USER_COLLECTION;
use crate::{
    database::model::user::UserDocument,
    store::{to_document, DocumentPath, DocumentStore},
};

#[derive(new)]
pub struct UserRepositoryImpl {
    store: Arc<dyn DocumentStore>,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<UserId> {
        let doc = to_document(&UserDocument::from(event))?;
        match self.store.add(USER_COLLECTION, doc).await {
            Ok(path) => Ok(UserId::new(path.id())),
            Err(e) => Err(unavailable(e)),
        }
    }

    async fn create_with_id(&self, user_id: UserId, event: CreateUser) -> AppResult<UserId> {
        let doc = to_document(&UserDocument::from(event))?;
        let path = DocumentPath::new(USER_COLLECTION, user_id.as_str());
        match self.store.set(&path, doc).await {
            Ok(()) => Ok(user_id),
            Err(e) => Err(unavailable(e)),
        }
    }

    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>> {
        let snapshot = self
            .store
            .get(&DocumentPath::new(USER_COLLECTION, user_id.as_str()))
            .await?;
        Ok(snapshot
            .decode::<UserDocument>()?
            .map(|doc| doc.into_user(user_id.clone())))
    }

    async fn delete(&self, _event: DeleteUser) -> AppResult<()> {
        Err(AppError::NotImplemented("user deletion"))
    }
}

fn unavailable(e: AppError) -> AppError {
    tracing::error!(error.message = %e, "failure saving user");
    AppError::Unavailable(format!("failure saving user: {e}"))
}
