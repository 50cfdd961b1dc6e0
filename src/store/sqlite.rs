use std::str::FromStr;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Opens (creating if missing) the single-file sqlite database and applies
/// the embedded migrations.
///
/// Identifier assignment for this backend is delegated to sqlite's
/// `AUTOINCREMENT` primary keys; see the schema under `migrations/`.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;

    info!("sqlite storage ready at `{}`", url);

    Ok(pool)
}
