use actix_web::{web, HttpResponse};

use crate::config::Settings;
use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod health;
pub mod items;
pub mod users;

/// Register every route: `/`, `/health`, and the versioned API under
/// `settings.api_v1_str`.
///
/// Used by `main.rs` and by the integration test app builder so both serve
/// identical paths.
pub fn configure(cfg: &mut web::ServiceConfig, settings: &Settings) {
    health::configure_routes(cfg);

    cfg.service(
        web::scope(&settings.api_v1_str)
            .configure(users::configure_routes)
            .configure(items::configure_routes),
    );
}

/// Fallback for unmatched routes; install with `App::default_service`.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::NotFound, "Not Found"))
}
