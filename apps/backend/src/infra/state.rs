use crate::config::Settings;
use crate::error::AppError;
use crate::infra::db::connect_and_migrate;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    settings: Settings,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Override only the connection string, keeping the rest of the settings.
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.settings.database_url = url.into();
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        // single entrypoint: connect + migrate
        let conn = connect_and_migrate(&self.settings).await?;
        Ok(AppState::new(conn, self.settings))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
