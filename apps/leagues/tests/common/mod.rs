#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{test, web, App};
use leagues::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use leagues::{routes, AppState, SeasonConfig};
use serde_json::Value;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    leagues_test_support::logging::init();
}

pub fn test_state() -> AppState {
    AppState::in_memory(SeasonConfig {
        default_weeks: 4,
        max_members: 12,
        max_weeks: 26,
    })
}

/// Production routes and middleware over the given state.
pub async fn test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

/// Assert a problem+json error body with the given status and code, and
/// that its trace id matches the `x-trace-id` header.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) {
    assert_eq!(resp.status().as_u16(), expected_status);

    let headers = resp.headers().clone();
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );
    let header_trace = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present")
        .to_string();

    let body: Value = test::read_body_json(resp).await;
    for key in ["type", "title", "status", "detail", "code", "trace_id"] {
        assert!(body.get(key).is_some(), "{key} field should be present");
    }
    assert_eq!(body["code"], expected_code);
    assert_eq!(body["status"], expected_status);
    assert_eq!(body["trace_id"], header_trace.as_str());
}
