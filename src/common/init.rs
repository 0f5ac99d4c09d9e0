use crate::common::state::AppState;
use crate::settings::AppSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

pub fn initialize_logging(settings: &AppSettings) {
    tracing_subscriber::fmt()
        .with_max_level(settings.level)
        // .json()
        .with_timer(tracing_subscriber::fmt::time())
        .with_level(true)
        .compact()
        .init();
}

pub async fn initialize_state(settings: &AppSettings) -> anyhow::Result<AppState> {
    let db = initialize_db(settings).await?;
    Ok(AppState {
        db,
        friendship_mode: settings.friendship_mode,
    })
}

pub async fn initialize_db(settings: &AppSettings) -> anyhow::Result<Pool<Sqlite>> {
    connect_db(
        &settings.database_url,
        settings.db_max_connections,
        settings.db_wait_timeout,
    )
    .await
}

/// Opens a pool against `database_url` and brings the schema up to date.
pub async fn connect_db(
    database_url: &str,
    max_connections: usize,
    wait_timeout: Duration,
) -> anyhow::Result<Pool<Sqlite>> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(wait_timeout);
    let db = SqlitePoolOptions::new()
        .acquire_timeout(wait_timeout)
        .max_connections(max_connections as _)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&db).await?;
    info!(database_url, "Database migrations completed");
    Ok(db)
}
