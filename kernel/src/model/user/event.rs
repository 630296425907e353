use derive_new::new;

use crate::model::{
    id::UserId,
    role::Role,
    session::ProviderIdentity,
    user::User,
};

#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub major: Option<String>,
    pub career: Option<String>,
}

impl CreateUser {
    /// Profile given to an identity that has no user record yet: a `Student`
    /// whose first and last names are the first two space-separated words of
    /// the provider's display name.
    pub fn default_profile(identity: &ProviderIdentity) -> Self {
        let mut words = identity.name.as_deref().unwrap_or_default().split(' ');
        let first_name = words.next().unwrap_or_default().to_owned();
        let last_name = words.next().unwrap_or_default().to_owned();
        Self {
            first_name,
            last_name,
            role: Role::Student,
            major: None,
            career: None,
        }
    }

    pub fn into_user(self, id: UserId) -> User {
        let CreateUser {
            first_name,
            last_name,
            role,
            major,
            career,
        } = self;
        User {
            id,
            first_name,
            last_name,
            role,
            major,
            career,
        }
    }
}

#[derive(new, Debug)]
pub struct DeleteUser {
    pub user_id: UserId,
}
