use garde::Validate;
use kernel::model::{
    id::UserId,
    session::{ProviderIdentity, Session, SessionUser},
};
use serde::{Deserialize, Serialize};

use super::user::RoleName;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    #[garde(length(min = 1))]
    pub id: String,
    #[garde(skip)]
    pub name: Option<String>,
    #[garde(skip)]
    pub email: Option<String>,
    #[garde(skip)]
    pub image: Option<String>,
}

impl From<SessionRequest> for ProviderIdentity {
    fn from(value: SessionRequest) -> Self {
        let SessionRequest {
            id,
            name,
            email,
            image,
        } = value;
        ProviderIdentity {
            id: UserId::new(id),
            name,
            email,
            image,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: SessionUserResponse,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserResponse {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
}

impl From<Session> for SessionResponse {
    fn from(value: Session) -> Self {
        let Session {
            user:
                SessionUser {
                    id,
                    name,
                    email,
                    image,
                    first_name,
                    last_name,
                    role,
                    major,
                    career,
                },
        } = value;
        Self {
            user: SessionUserResponse {
                id,
                name,
                email,
                image,
                first_name,
                last_name,
                role: role.map(RoleName::from),
                major,
                career,
            },
        }
    }
}
