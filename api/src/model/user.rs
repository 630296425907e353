use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleName {
    Student,
    Officer,
    Admin,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Student => Self::Student,
            Role::Officer => Self::Officer,
            Role::Admin => Self::Admin,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Student => Self::Student,
            RoleName::Officer => Self::Officer,
            RoleName::Admin => Self::Admin,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub role: RoleName,
    pub major: Option<String>,
    pub career: Option<String>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            role,
            major,
            career,
        } = value;
        Self {
            id,
            first_name,
            last_name,
            role: RoleName::from(role),
            major,
            career,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1, max = 100))]
    first_name: String,
    #[garde(length(max = 100))]
    #[serde(default)]
    last_name: String,
    #[garde(skip)]
    #[serde(default = "default_role")]
    role: RoleName,
    #[garde(length(min = 1, max = 100))]
    major: Option<String>,
    #[garde(length(min = 1, max = 100))]
    career: Option<String>,
}

fn default_role() -> RoleName {
    RoleName::Student
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            first_name,
            last_name,
            role,
            major,
            career,
        } = value;
        Self {
            first_name,
            last_name,
            role: Role::from(role),
            major,
            career,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUserResponse {
    pub id: UserId,
}
