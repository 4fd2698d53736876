//! HTTP server initialization and runtime setup.
//!
//! Selects the storage backend once from configuration, wires up the
//! services, and runs the Axum server.

use crate::config::{Config, StorageConfig};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{JsonFileRepository, SqliteLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The storage backend (SQLite pool + migrations, or the JSON snapshot file)
/// - The link registry and redirect resolver
/// - The Axum HTTP server
///
/// # Errors
///
/// Returns an error if the backend can't be opened, the bind fails, or the
/// server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_repository(&config).await?;

    let state = AppState::new(repository);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Opens the configured storage backend.
async fn connect_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    match &config.storage {
        StorageConfig::Database { url } => {
            let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
            let pool = SqlitePoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect_with(options)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;

            Ok(Arc::new(SqliteLinkRepository::new(Arc::new(pool))))
        }
        StorageConfig::File { path } => {
            tracing::warn!(
                "DATABASE_URL not set, using file-backed link store at {}",
                path.display()
            );
            Ok(Arc::new(JsonFileRepository::open(path.clone()).await?))
        }
    }
}
