//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: one-time logging
//! initialization, ProblemDetails contract assertions and unique test data.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
