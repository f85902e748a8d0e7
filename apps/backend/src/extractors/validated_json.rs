use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Largest request body `ValidatedJson` will buffer.
pub const DEFAULT_BODY_LIMIT: usize = 256 * 1024;

/// JSON body extractor with the API's error contract.
///
/// Any body that does not deserialize into `T` (bad syntax, missing required
/// field, wrong type) is rejected with 422 `VALIDATION_ERROR` before the
/// handler runs. A body that cannot be read at all is a 400; one larger than
/// `DEFAULT_BODY_LIMIT` is a 413.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        // Extract content type before creating the async future to avoid borrow-across-await
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();
        let declared_len = req
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<usize>().ok());

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            if declared_len.is_some_and(|len| len > DEFAULT_BODY_LIMIT) {
                return Err(body_too_large(&trace_id));
            }

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(trace_id = %trace_id, error = %e, "Failed to read request body chunk");
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                if body.len() + chunk.len() > DEFAULT_BODY_LIMIT {
                    return Err(body_too_large(&trace_id));
                }
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                let detail = classify_json_error(&e);

                debug!(
                    trace_id = %trace_id,
                    error = %Redacted(&e.to_string()),
                    content_type = %content_type,
                    body_size = body.len(),
                    "JSON validation failed"
                );

                AppError::invalid(ErrorCode::ValidationError, detail)
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

fn body_too_large(trace_id: &str) -> AppError {
    warn!(trace_id = %trace_id, limit = DEFAULT_BODY_LIMIT, "Request body too large");
    AppError::payload_too_large(format!(
        "Request body exceeds {DEFAULT_BODY_LIMIT} bytes"
    ))
}

/// Turn a serde_json error into a client-safe message.
///
/// Missing-field errors name the field; other data errors stay generic so
/// submitted values never echo back.
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            format!("Invalid JSON at line {}", error.line())
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => {
            let message = error.to_string();
            match missing_field_name(&message) {
                Some(field) => format!("Missing required field: {field}"),
                None => "Invalid JSON: wrong types for one or more fields".to_string(),
            }
        }
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}

// serde's message shape: "missing field `email` at line 1 column 2"
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}
