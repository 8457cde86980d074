// src/db.rs

use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::{
    error::AppError,
    models::question::NewQuestion,
    repository::QuestionRepository,
};

/// Question set inserted into an empty database on first start.
const SEED_QUESTIONS: &str = include_str!("../seed/questions.json");

const MAX_CONNECT_RETRIES: u32 = 5;

/// Opens the connection pool, retrying while the database is unavailable.
/// The database file is created if it does not exist yet.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut retry_count = 0;
    loop {
        match SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options.clone())
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) => {
                retry_count += 1;
                if retry_count > MAX_CONNECT_RETRIES {
                    return Err(e);
                }
                tracing::warn!(
                    "Database not ready, retrying in 2s... (Attempt {})",
                    retry_count
                );
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
}

/// Single-connection in-memory database, used by tests.
/// The connection is never recycled, otherwise the data would vanish with it.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Applies the embedded migrations from `./migrations`.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Inserts the bundled questions when the question table is empty.
/// Returns the number of inserted questions.
pub async fn seed_questions<S>(store: &S) -> Result<usize, AppError>
where
    S: QuestionRepository + ?Sized,
{
    if store.count_questions().await? > 0 {
        tracing::debug!("Questions already present, skipping seed");
        return Ok(0);
    }

    let questions: Vec<NewQuestion> = serde_json::from_str(SEED_QUESTIONS)
        .map_err(|e| AppError::InternalServerError(format!("Invalid seed file: {}", e)))?;

    for question in &questions {
        store.create_question(question).await?;
    }

    tracing::info!("Seeded {} questions", questions.len());
    Ok(questions.len())
}
