use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($id_type: ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $id_type(String);

        impl $id_type {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $id_type {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $id_type {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<$id_type> for String {
            fn from(value: $id_type) -> Self {
                value.0
            }
        }
    };
}

define_id!(UserId);
// A club is keyed by its display name.
define_id!(ClubId);
define_id!(EventId);
