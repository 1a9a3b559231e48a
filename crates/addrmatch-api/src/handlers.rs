//! HTTP request handlers for the comparison service.
//!
//! Implements the comparison and health check endpoints using axum.

use addrmatch_comparator::{Comparator, ComparatorError};
use addrmatch_domain::{ComparisonRequest, ComparisonVerdict, TextOracle};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Shared application state
pub struct AppState<O>
where
    O: TextOracle,
{
    /// Comparator handle; `None` when no oracle credential is configured
    pub comparator: Option<Arc<Comparator<O>>>,
}

// Manual impl: a derived Clone would demand O: Clone
impl<O: TextOracle> Clone for AppState<O> {
    fn clone(&self) -> Self {
        Self {
            comparator: self.comparator.clone(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall service status
    pub status: String,
    /// Whether an oracle credential is configured
    pub oracle_configured: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request failed input validation
    InvalidInput(String),
    /// No oracle credential configured
    MissingCredential,
    /// Comparison pipeline failure
    Comparator(ComparatorError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg)
            | AppError::Comparator(ComparatorError::InvalidInput(msg)) => {
                (StatusCode::BAD_REQUEST, format!("Invalid input: {}", msg))
            }
            AppError::MissingCredential => {
                error!("Oracle credential is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Oracle credential is not configured.".to_string(),
                )
            }
            AppError::Comparator(e) => {
                // The detailed cause stays in the server log; the client
                // sees a generic message with no provider internals
                error!("Comparison failed: {}", e);
                let message = match e {
                    ComparatorError::MalformedReply(_) => {
                        "Received an unusable reply from the comparison oracle."
                    }
                    ComparatorError::InvalidVerdict(_) => {
                        "Received an invalid verdict from the comparison oracle."
                    }
                    _ => "Failed to call the comparison oracle.",
                };
                (StatusCode::BAD_GATEWAY, message.to_string())
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// POST /api/compare - Compare two addresses
///
/// Validates the request and the credential before any outbound call, then
/// delegates to the Comparator and returns its verdict verbatim.
async fn compare_addresses<O>(
    State(state): State<AppState<O>>,
    Json(request): Json<ComparisonRequest>,
) -> Result<Json<ComparisonVerdict>, AppError>
where
    O: TextOracle + 'static,
{
    request.validate().map_err(AppError::InvalidInput)?;

    let comparator = state.comparator.as_ref().ok_or(AppError::MissingCredential)?;

    let verdict = comparator
        .compare(&request)
        .await
        .map_err(AppError::Comparator)?;

    Ok(Json(verdict))
}

/// GET /health - Liveness and configuration check
async fn health_check<O>(State(state): State<AppState<O>>) -> Json<HealthCheckResponse>
where
    O: TextOracle + 'static,
{
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        oracle_configured: state.comparator.is_some(),
    })
}

/// Create the axum router with all routes
pub fn create_router<O>(state: AppState<O>) -> Router
where
    O: TextOracle + 'static,
{
    Router::new()
        .route("/api/compare", post(compare_addresses::<O>))
        .route("/health", get(health_check::<O>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrmatch_comparator::ComparatorConfig;
    use addrmatch_llm::MockOracle;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot

    fn create_test_state(oracle: MockOracle) -> AppState<MockOracle> {
        AppState {
            comparator: Some(Arc::new(Comparator::new(oracle, ComparatorConfig::default()))),
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let state = create_test_state(MockOracle::default());
        let app = create_router(state);

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_check_reports_missing_oracle() {
        let state: AppState<MockOracle> = AppState { comparator: None };
        let app = create_router(state);

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthCheckResponse = serde_json::from_slice(&bytes).unwrap();
        assert!(!health.oracle_configured);
    }

    #[tokio::test]
    async fn test_compare_success() {
        let oracle = MockOracle::new(
            r#"{"match": true, "confidence": 0.92, "reasoning": "Same location."}"#,
        );
        let app = create_router(create_test_state(oracle));

        let request = Request::builder()
            .method("POST")
            .uri("/api/compare")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"address1": "123 Main St", "address2": "123 Main Street"}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_compare_rejects_empty_address() {
        let app = create_router(create_test_state(MockOracle::default()));

        let request = Request::builder()
            .method("POST")
            .uri("/api/compare")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"address1": "", "address2": "456 Oak Ave"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
