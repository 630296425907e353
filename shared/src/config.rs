use anyhow::{Context, Result};
use strum::EnumString;

pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let server = ServerConfig {
            port: optional_var("PORT")?.unwrap_or(8080),
        };
        let backend: StoreBackend = optional_var("STORE_BACKEND")?.unwrap_or_default();
        let database = match backend {
            StoreBackend::Memory => None,
            StoreBackend::Postgres => Some(DatabaseConfig::from_env()?),
        };
        let auth = AuthConfig {
            persist_new_users: optional_var("AUTH_PERSIST_NEW_USERS")?.unwrap_or(false),
        };
        Ok(Self {
            server,
            store: StoreConfig { backend, database },
            auth,
        })
    }
}

pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Postgres,
}

pub struct StoreConfig {
    pub backend: StoreBackend,
    pub database: Option<DatabaseConfig>,
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl DatabaseConfig {
    fn from_env() -> Result<Self> {
        Ok(Self {
            host: required_var("DATABASE_HOST")?,
            port: required_var("DATABASE_PORT")?.parse()?,
            username: required_var("DATABASE_USERNAME")?,
            password: required_var("DATABASE_PASSWORD")?,
            database: required_var("DATABASE_NAME")?,
        })
    }
}

pub struct AuthConfig {
    /// Save a default profile for identities that have no user record yet.
    pub persist_new_users: bool,
}

fn required_var(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("environment variable {key} is not set"))
}

fn optional_var<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => v
            .parse()
            .map(Some)
            .with_context(|| format!("invalid value for {key}: {v}")),
        Err(_) => Ok(None),
    }
}
