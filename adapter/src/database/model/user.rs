use kernel::model::{
    id::UserId,
    role::Role,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct UserDocument {
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
}

impl From<CreateUser> for UserDocument {
    fn from(value: CreateUser) -> Self {
        let CreateUser {
            first_name,
            last_name,
            role,
            major,
            career,
        } = value;
        Self {
            first_name,
            last_name,
            role,
            major,
            career,
        }
    }
}

impl UserDocument {
    pub fn into_user(self, id: UserId) -> User {
        let UserDocument {
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
