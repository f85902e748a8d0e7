use std::future::{ready, Ready};
use std::num::IntErrorKind;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Integer `{id}` path segment.
///
/// Parsed as `i64` so any well-formed integer reaches the lookup and a miss
/// is a 404. Only a segment that is not an integer (or overflows `i64`) is
/// a validation failure (422).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

impl PathId {
    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl FromRequest for PathId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_path_id(req.match_info().get("id")))
    }
}

fn parse_path_id(raw: Option<&str>) -> Result<PathId, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::invalid(ErrorCode::ValidationError, "Missing id path parameter")
    })?;

    raw.parse::<i64>().map(PathId).map_err(|e| {
        let detail = match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                format!("Invalid id: '{raw}' is out of range")
            }
            _ => format!("Invalid id: expected an integer, got '{raw}'"),
        };
        AppError::invalid(ErrorCode::ValidationError, detail)
    })
}
