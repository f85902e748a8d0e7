//! Database infrastructure - connection management and migrations.

pub mod core;

pub use self::core::{bootstrap_db, connect_db, orchestrate_migration, sanitize_db_url};

pub use crate::config::db::{DbKind, PoolSettings};
