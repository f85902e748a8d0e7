use db_infra::config::db::PoolSettings;
use db_infra::{bootstrap_db, sanitize_db_url};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::Settings;
use crate::error::AppError;

/// Pool sizing derived from settings.
pub fn pool_settings(settings: &Settings) -> PoolSettings {
    PoolSettings {
        max_connections: settings.db_max_connections,
        ..PoolSettings::default()
    }
}

/// Connect to `settings.database_url` and apply pending migrations.
pub async fn connect_and_migrate(settings: &Settings) -> Result<DatabaseConnection, AppError> {
    let conn = bootstrap_db(&settings.database_url, &pool_settings(settings)).await?;
    info!(url = %sanitize_db_url(&settings.database_url), "db=ready");
    Ok(conn)
}
