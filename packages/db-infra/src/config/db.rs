use std::time::Duration;

use sea_orm::{ConnectOptions, DatabaseBackend};

use crate::error::DbInfraError;

/// Storage engine selected by the connection string scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

impl DbKind {
    /// Classify a connection string by scheme.
    pub fn from_url(url: &str) -> Result<Self, DbInfraError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(DbInfraError::Config {
                message: "database url must not be empty".to_string(),
            });
        }

        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            return Ok(Self::Postgres);
        }

        if let Some(rest) = url.strip_prefix("sqlite:") {
            let rest = rest.trim_start_matches("//");
            let path = rest.split('?').next().unwrap_or_default();
            let memory = path.is_empty()
                || path == ":memory:"
                || url.contains("mode=memory");
            return Ok(if memory {
                Self::SqliteMemory
            } else {
                Self::SqliteFile
            });
        }

        Err(DbInfraError::Config {
            message: format!(
                "unsupported database url scheme: '{}' (expected postgres:// or sqlite:)",
                url.split(':').next().unwrap_or_default()
            ),
        })
    }

    pub fn is_sqlite(self) -> bool {
        matches!(self, Self::SqliteFile | Self::SqliteMemory)
    }
}

impl From<DbKind> for DatabaseBackend {
    fn from(kind: DbKind) -> Self {
        match kind {
            DbKind::Postgres => DatabaseBackend::Postgres,
            DbKind::SqliteFile | DbKind::SqliteMemory => DatabaseBackend::Sqlite,
        }
    }
}

/// Pool sizing knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Idle timeout and max lifetime for the in-memory SQLite connection. The
/// database dies with its connection, so it must never be recycled; SeaORM
/// only takes finite durations.
pub const MEMORY_CONNECTION_RETENTION: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Build SeaORM connect options for the given backend.
///
/// SQLite pools hold exactly one connection: an in-memory database lives only
/// as long as its connection, and a single writer avoids SQLITE_BUSY.
pub fn connect_options(url: &str, kind: DbKind, pool: &PoolSettings) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url.to_string());
    opt.acquire_timeout(pool.acquire_timeout)
        .sqlx_logging(false);

    if kind.is_sqlite() {
        opt.min_connections(1).max_connections(1);
        if kind == DbKind::SqliteMemory {
            opt.idle_timeout(MEMORY_CONNECTION_RETENTION)
                .max_lifetime(MEMORY_CONNECTION_RETENTION);
        }
    } else {
        opt.min_connections(1)
            .max_connections(pool.max_connections.max(1));
    }

    opt
}
