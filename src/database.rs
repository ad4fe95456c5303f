//! Startup-only SQLite bootstrap.
//!
//! The request handlers serve posts from the in-memory store and never read
//! or write this database. It is created at boot so the table exists for a
//! future persistent backend.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::SqliteExecutor;

use crate::services::response::ServiceError;

const CREATE_POST_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS post (
	id INTEGER PRIMARY KEY AUTOINCREMENT,
	title TEXT NOT NULL,
	content TEXT NOT NULL,
	created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

pub async fn connection_pool(url: &str) -> Result<SqlitePool, ServiceError> {
	let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
	let pool = SqlitePoolOptions::new().max_connections(5).connect_with(options).await.map_err(|err| {
		tracing::error!("Failed to open database {}: {}", url, err);
		err
	})?;
	Ok(pool)
}

pub async fn create_db_and_tables<'e, E>(executor: E) -> Result<(), ServiceError>
where
	E: SqliteExecutor<'e>,
{
	sqlx::query(CREATE_POST_TABLE).execute(executor).await?;
	tracing::info!("Database tables are ready");
	Ok(())
}
