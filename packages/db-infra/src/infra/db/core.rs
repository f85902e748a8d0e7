use migration::{migrate, MigrationCommand, MigrationName, Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::{info, trace};

use crate::config::db::{connect_options, DbKind, PoolSettings};
use crate::error::DbInfraError;

/// Sanitize database URL by masking the password, for logging.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.rsplit_once('@') else {
        return url.to_string();
    };
    let Some((scheme, userinfo)) = auth_part.split_once("://") else {
        return url.to_string();
    };
    match userinfo.split_once(':') {
        Some((user, _password)) => format!("{scheme}://{user}:***@{host_part}"),
        None => url.to_string(),
    }
}

/// Open a connection pool. This function does NOT run any migrations.
pub async fn connect_db(url: &str, pool: &PoolSettings) -> Result<DatabaseConnection, DbInfraError> {
    let kind = DbKind::from_url(url)?;
    let opt = connect_options(url, kind, pool);

    info!(
        db_kind = ?kind,
        url = %sanitize_db_url(url),
        max_connections = opt.get_max_connections().unwrap_or_default(),
        "db=connect"
    );

    Database::connect(opt)
        .await
        .map_err(|e| DbInfraError::Connect {
            message: format!("failed to connect to {kind:?} database: {e}"),
        })
}

/// Connect and bring the schema up to date. Single entrypoint used at startup.
pub async fn bootstrap_db(url: &str, pool: &PoolSettings) -> Result<DatabaseConnection, DbInfraError> {
    let conn = connect_db(url, pool).await?;

    if schema_is_current(&conn).await? {
        info!("migrate=skipped up_to_date=true");
        return Ok(conn);
    }

    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| DbInfraError::Migration {
            message: format!("migration execution failed: {e}"),
        })?;

    verify_applied(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}

/// Run a migration command against `url`. Used by the migration CLI.
pub async fn orchestrate_migration(url: &str, command: MigrationCommand) -> Result<(), DbInfraError> {
    let kind = DbKind::from_url(url)?;
    info!(
        "migrate=start db_kind={:?} url={} command={:?}",
        kind,
        sanitize_db_url(url),
        command
    );

    let conn = connect_db(url, &PoolSettings::default()).await?;

    migrate(&conn, command)
        .await
        .map_err(|e| DbInfraError::Migration {
            message: format!("migration execution failed: {e}"),
        })?;

    verify_applied(&conn, command).await?;
    info!("migrate=done");
    Ok(())
}

async fn applied_migration_names(conn: &DatabaseConnection) -> Result<Vec<String>, DbInfraError> {
    match Migrator::get_applied_migrations(conn).await {
        Ok(migrations) => Ok(migrations.iter().map(|m| m.name().to_string()).collect()),
        Err(DbErr::Exec(_)) => Ok(Vec::new()),
        Err(e) => Err(DbInfraError::Migration {
            message: format!("failed to get applied migrations: {e}"),
        }),
    }
}

async fn schema_is_current(conn: &DatabaseConnection) -> Result<bool, DbInfraError> {
    let expected: Vec<String> = Migrator::migrations()
        .iter()
        .map(|m| m.name().to_string())
        .collect();
    let applied = applied_migration_names(conn).await?;

    let current = applied == expected;
    trace!(
        fastpath = if current { "hit" } else { "miss" },
        applied_count = applied.len(),
        expected_count = expected.len()
    );
    Ok(current)
}

async fn verify_applied(
    conn: &DatabaseConnection,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    let expected_count = Migrator::migrations().len();
    let applied_count = applied_migration_names(conn).await?.len();
    info!(
        migrate = "counts",
        expected_count = expected_count,
        applied_count = applied_count
    );

    match command {
        MigrationCommand::Reset if applied_count != 0 => Err(DbInfraError::Migration {
            message: format!(
                "Migration verification failed: reset should leave 0 migrations applied, but {applied_count} were found"
            ),
        }),
        MigrationCommand::Up | MigrationCommand::Fresh | MigrationCommand::Refresh
            if applied_count != expected_count =>
        {
            Err(DbInfraError::Migration {
                message: format!(
                    "Migration verification failed: expected {expected_count} migrations, but {applied_count} were applied"
                ),
            })
        }
        _ => Ok(()),
    }
}
