//! Error codes for the Items API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and appears verbatim in the `code`
//! field of error responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Request body or path failed schema validation
    ValidationError,
    /// Request could not be read at all
    BadRequest,
    /// Request body exceeds the accepted size
    PayloadTooLarge,

    // Resource Not Found
    UserNotFound,
    ItemNotFound,
    /// No route or unspecified resource
    NotFound,

    // System Errors
    DbError,
    DbUnavailable,
    ConfigError,
}

impl ErrorCode {
    /// All codes, for uniqueness and formatting checks.
    pub const ALL: [ErrorCode; 9] = [
        Self::ValidationError,
        Self::BadRequest,
        Self::PayloadTooLarge,
        Self::UserNotFound,
        Self::ItemNotFound,
        Self::NotFound,
        Self::DbError,
        Self::DbUnavailable,
        Self::ConfigError,
    ];

    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ItemNotFound => "ITEM_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
