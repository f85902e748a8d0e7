use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Settings;

/// Shared per-process resources, handed to handlers as `web::Data<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Connection pool; each request takes a transaction from it.
    pub db: DatabaseConnection,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, settings: Settings) -> Self {
        Self {
            db,
            settings: Arc::new(settings),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
