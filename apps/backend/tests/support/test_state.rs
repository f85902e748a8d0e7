use backend::config::Settings;
use backend::infra::state::{build_state, StateBuilder};
use backend::state::app_state::AppState;
use backend::AppError;

pub const TEST_DATABASE_URL: &str = "sqlite::memory:";

/// State builder over a private in-memory SQLite database.
///
/// The SQLite pool holds a single connection, so every test gets its own
/// isolated, freshly migrated database.
pub fn test_state_builder() -> StateBuilder {
    build_state().with_settings(Settings {
        database_url: TEST_DATABASE_URL.to_string(),
        ..Settings::default()
    })
}

pub async fn build_test_state() -> Result<AppState, AppError> {
    test_state_builder().build().await
}
