//! SeaORM -> DomainError translation.
//!
//! Adapters return `sea_orm::DbErr`; repos convert here (via `?` and the
//! `From` impl below) and higher layers map `DomainError` to `AppError`.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
///
/// Connection failures become `DbUnavailable`; every other storage failure,
/// constraint violations included, is a generic infra error. The raw message
/// is logged (redacted) and never returned to the client.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Record not found");
            DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        }
        _ => {
            error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
            DomainError::infra(
                InfraErrorKind::Other("DbErr".into()),
                "Database operation failed",
            )
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
