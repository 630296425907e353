use crate::model::{id::UserId, role::Role, user::User};

/// Identity handed over by the external provider after a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderIdentity {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: SessionUser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<Role>,
    pub major: Option<String>,
    pub career: Option<String>,
}

impl Session {
    /// Merges a stored profile into the provider identity. Identity fields
    /// win where both sides carry a value.
    pub fn merged(identity: ProviderIdentity, stored: Option<User>) -> Self {
        let ProviderIdentity {
            id,
            name,
            email,
            image,
        } = identity;
        let user = match stored {
            Some(User {
                id: _,
                first_name,
                last_name,
                role,
                major,
                career,
            }) => SessionUser {
                id,
                name,
                email,
                image,
                first_name: Some(first_name),
                last_name: Some(last_name),
                role: Some(role),
                major,
                career,
            },
            None => SessionUser {
                id,
                name,
                email,
                image,
                first_name: None,
                last_name: None,
                role: None,
                major: None,
                career: None,
            },
        };
        Self { user }
    }
}
