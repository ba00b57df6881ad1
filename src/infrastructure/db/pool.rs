use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

pub type DbPool = Pool<Sqlite>;

pub async fn connect_to_db(database_url: &str) -> Result<DbPool, sqlx::Error> {
    // The schema declares the Movies->Genres FK for documentation only; the
    // design keeps SQLite's foreign_keys pragma off so genre deletion stays
    // unguarded. sqlx enables it by default, so disable it explicitly.
    let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    info!("Connected to database at {database_url}");
    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await?;
    info!("Migrations applied");
    Ok(())
}
