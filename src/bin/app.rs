use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};

use adapter::{
    database::{connect_database_with, store::PgDocumentStore},
    store::{memory::MemoryStore, DocumentStore},
};
use anyhow::{Context, Result};
use api::route::v1;
use axum::Router;
use registry::AppRegistry;
use shared::config::{AppConfig, StoreBackend, StoreConfig};
use shared::env::{which, Environment};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    bootstrap().await
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

async fn connect_store(cfg: &StoreConfig) -> Result<Arc<dyn DocumentStore>> {
    match cfg.backend {
        StoreBackend::Memory => {
            tracing::warn!("using the in-memory document store; data is lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Postgres => {
            let database = cfg
                .database
                .as_ref()
                .context("postgres store selected without database settings")?;
            let store = PgDocumentStore::new(connect_database_with(database));
            store
                .ensure_schema()
                .await
                .context("failed to prepare the documents table")?;
            Ok(Arc::new(store))
        }
    }
}

async fn bootstrap() -> Result<()> {
    let app_config = AppConfig::new()?;
    let store = connect_store(&app_config.store).await?;

    let registry = AppRegistry::new(store, &app_config.auth);

    let app = Router::new()
        .merge(v1::routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(registry);

    let addr = SocketAddr::new(Ipv4Addr::LOCALHOST.into(), app_config.server.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("Unexpected error happened in server")
        .inspect_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,error.message = %e, "Unexpected error"
            )
        })
}
