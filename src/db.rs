use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, SqlitePool};
use sqlx_migrator::{Migrate, Plan};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

/// Connection options shared by every pool.
///
/// Applied per connection: busy timeout, `synchronous=NORMAL`, a larger page
/// cache and in-memory temp tables.
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .pragma("cache_size", "-20000")
        .pragma("temp_store", "memory")
        .log_statements(LevelFilter::Debug))
}

/// Create a read-only connection pool for concurrent queries
///
/// The database must already exist, see [`create_write_pool`].
pub async fn create_read_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = connect_options(database_url)?.read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(max_connections, "Created read-only pool");

    Ok(pool)
}

/// Create the single-connection pool used by every write
///
/// Creates the database file when missing and switches it to WAL so the read
/// pool never blocks on writers.
pub async fn create_write_pool(database_url: &str) -> Result<SqlitePool> {
    let options = connect_options(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    tracing::info!("Created read-write pool with 1 max connection");

    Ok(pool)
}

/// Create a standard pool without read/write separation
///
/// Used by CLI commands and tests.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = connect_options(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(max_connections, "Created pool");

    Ok(pool)
}

/// Apply every pending schema migration.
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    campusconnect_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_pool_applies_pragmas() {
        let dir = temp_dir::TempDir::new().unwrap();
        let url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());
        let pool = create_pool(&url, 1).await.unwrap();

        let journal_mode: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(journal_mode.0, "wal");

        let foreign_keys: (i32,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(foreign_keys.0, 1);

        let temp_store: (i32,) = sqlx::query_as("PRAGMA temp_store")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(temp_store.0, 2);
    }

    #[tokio::test]
    async fn test_read_pool_rejects_writes() {
        let dir = temp_dir::TempDir::new().unwrap();
        let url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());
        let write_pool = create_write_pool(&url).await.unwrap();
        migrate(&write_pool).await.unwrap();

        let read_pool = create_read_pool(&url, 2).await.unwrap();
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM event")
            .fetch_one(&read_pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);

        let resp = sqlx::query("DELETE FROM event").execute(&read_pool).await;
        assert!(resp.is_err());
    }
}
