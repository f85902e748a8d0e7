use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::state::app_state::AppState;

async fn root(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!("Hello from {}!", app_state.settings().project_name)))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub app_version: String,
    pub db: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_error: Option<String>,
    pub migrations: String,
    pub time: String,
}

/// Liveness plus a cheap DB probe. Always 200; DB trouble shows up in the body.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let db = app_state.db();
    let probe = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1 AS health_check".to_string(),
        ))
        .await;

    let (db_status, db_error, migrations) = match probe {
        Ok(_) => {
            let migrations = match get_latest_migration_version(db).await {
                Ok(Some(version)) => version,
                Ok(None) => "no_migrations".to_string(),
                Err(_) => "unknown".to_string(),
            };
            ("ok", None, migrations)
        }
        Err(e) => {
            let detail = format!("DB query failed: {e}");
            tracing::warn!(error = %Redacted(&detail), "health.db_probe_failed");
            ("error", Some(Redacted(&detail).to_string()), "unknown".to_string())
        }
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        db: db_status.to_string(),
        db_error,
        migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health));
}
