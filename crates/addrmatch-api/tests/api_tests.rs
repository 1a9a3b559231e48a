//! Integration tests for the comparison API
//!
//! Drives the full handler → comparator → oracle pipeline through the
//! axum router with a mock oracle, so every contract scenario is
//! exercised without a network.

use addrmatch_api::handlers::{create_router, AppState, ErrorResponse, HealthCheckResponse};
use addrmatch_comparator::{Comparator, ComparatorConfig};
use addrmatch_domain::{ComparisonVerdict, OracleError};
use addrmatch_llm::MockOracle;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use std::sync::Arc;
use tower::ServiceExt;

const VALID_REPLY: &str =
    r#"{"match": true, "confidence": 0.92, "reasoning": "Same street and city, abbreviation normalized."}"#;

fn state_with(oracle: MockOracle) -> AppState<MockOracle> {
    AppState {
        comparator: Some(Arc::new(Comparator::new(oracle, ComparatorConfig::default()))),
    }
}

fn compare_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/compare")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_verdict_returned_verbatim_from_fenced_reply() {
    let oracle = MockOracle::new(format!("```json\n{}\n```", VALID_REPLY));
    let app = create_router(state_with(oracle));

    let response = app
        .oneshot(compare_request(
            r#"{"address1": "123 Main St, Springfield", "address2": "123 Main Street, Springfield"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let verdict: ComparisonVerdict = read_json(response).await;
    assert!(verdict.is_match);
    assert_eq!(verdict.confidence, 0.92);
    assert_eq!(
        verdict.reasoning,
        "Same street and city, abbreviation normalized."
    );
}

#[tokio::test]
async fn test_bare_and_fenced_replies_agree() {
    let body = r#"{"address1": "10 Downing St", "address2": "10 Downing Street"}"#;

    let bare = create_router(state_with(MockOracle::new(VALID_REPLY)))
        .oneshot(compare_request(body))
        .await
        .unwrap();
    let fenced = create_router(state_with(MockOracle::new(format!(
        "```json\n{}\n```",
        VALID_REPLY
    ))))
    .oneshot(compare_request(body))
    .await
    .unwrap();

    let bare_verdict: ComparisonVerdict = read_json(bare).await;
    let fenced_verdict: ComparisonVerdict = read_json(fenced).await;
    assert_eq!(bare_verdict, fenced_verdict);
}

#[tokio::test]
async fn test_empty_address_rejected_without_oracle_call() {
    let oracle = MockOracle::new(VALID_REPLY);
    let app = create_router(state_with(oracle.clone()));

    let response = app
        .oneshot(compare_request(r#"{"address1": "", "address2": "456 Oak Ave"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(oracle.call_count(), 0);

    let error: ErrorResponse = read_json(response).await;
    assert!(error.error.contains("address1"));
}

#[tokio::test]
async fn test_absent_address_field_rejected_without_oracle_call() {
    let oracle = MockOracle::new(VALID_REPLY);
    let app = create_router(state_with(oracle.clone()));

    let response = app
        .oneshot(compare_request(r#"{"address1": "123 Main St"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn test_missing_credential_rejected_before_any_call() {
    let state: AppState<MockOracle> = AppState { comparator: None };
    let app = create_router(state);

    let response = app
        .oneshot(compare_request(
            r#"{"address1": "123 Main St", "address2": "123 Main Street"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error: ErrorResponse = read_json(response).await;
    assert!(error.error.contains("credential"));
}

#[tokio::test]
async fn test_input_error_takes_precedence_over_missing_credential() {
    let state: AppState<MockOracle> = AppState { comparator: None };
    let app = create_router(state);

    let response = app
        .oneshot(compare_request(r#"{"address1": "", "address2": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_oracle_failure_is_not_echoed_to_the_client() {
    let oracle = MockOracle::failing(OracleError::Communication(
        "HTTP 403 secret-internal-diagnostic".to_string(),
    ));
    let app = create_router(state_with(oracle));

    let response = app
        .oneshot(compare_request(
            r#"{"address1": "123 Main St", "address2": "123 Main Street"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let error: ErrorResponse = read_json(response).await;
    assert!(!error.error.contains("secret-internal-diagnostic"));
    assert!(!error.error.is_empty());
}

#[tokio::test]
async fn test_unparseable_oracle_reply_is_a_gateway_error() {
    // Unquoted key: not JSON
    let oracle = MockOracle::new("here you go: {match: true}");
    let app = create_router(state_with(oracle));

    let response = app
        .oneshot(compare_request(
            r#"{"address1": "123 Main St", "address2": "123 Main Street"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_wrongly_typed_verdict_is_a_gateway_error() {
    let oracle = MockOracle::new(r#"{"match": "yes", "confidence": 0.5, "reasoning": "ok"}"#);
    let app = create_router(state_with(oracle));

    let response = app
        .oneshot(compare_request(
            r#"{"address1": "123 Main St", "address2": "123 Main Street"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_empty_candidate_list_is_a_gateway_error() {
    let oracle = MockOracle::failing(OracleError::InvalidResponse(
        "Response contained no candidates".to_string(),
    ));
    let app = create_router(state_with(oracle));

    let response = app
        .oneshot(compare_request(
            r#"{"address1": "123 Main St", "address2": "123 Main Street"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_health_reports_oracle_state() {
    let configured = create_router(state_with(MockOracle::default()));
    let response = configured
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let health: HealthCheckResponse = read_json(response).await;
    assert_eq!(health.status, "ok");
    assert!(health.oracle_configured);

    let unconfigured = create_router::<MockOracle>(AppState { comparator: None });
    let response = unconfigured
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let health: HealthCheckResponse = read_json(response).await;
    assert!(!health.oracle_configured);
}
