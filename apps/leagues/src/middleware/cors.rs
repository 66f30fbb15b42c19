use actix_cors::Cors;
use actix_web::http::header;

use crate::extractors::active_league::ACTIVE_LEAGUE_HEADER;
use crate::middleware::request_trace::TRACE_HEADER;

/// CORS for the league web client. Origins come from `AppConfig`.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(ACTIVE_LEAGUE_HEADER),
            header::HeaderName::from_static(TRACE_HEADER),
        ])
        .expose_headers(vec![header::HeaderName::from_static(TRACE_HEADER)])
        .max_age(3600);

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
