use actix_cors::Cors;
use actix_web::http::header;

use crate::config::Settings;

const FALLBACK_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Origins the browser may call from.
///
/// Entries that are empty, `null` or not http(s) are dropped; if nothing
/// valid remains, only localhost:3000 is allowed.
pub fn allowed_origins(settings: &Settings) -> Vec<String> {
    let configured: Vec<String> = settings
        .cors_allowed_origins
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if configured.is_empty() {
        FALLBACK_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        configured
    }
}

/// CORS for the API: explicit origins, only the methods the API serves.
pub fn cors_middleware(settings: &Settings) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .max_age(3600);

    for origin in allowed_origins(settings) {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
