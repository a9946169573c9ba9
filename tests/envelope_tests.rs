use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use logistics_backend::util::error::{HandlerError, ServiceError};

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_not_found_envelope() {
    let response = HandlerError::not_found("Quote not found.").into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Quote not found.");
}

#[tokio::test]
async fn test_bad_request_envelope() {
    let response = HandlerError::bad_request("All fields are required.").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "All fields are required.");
}

#[tokio::test]
async fn test_service_error_status_mapping() {
    let cases = [
        (
            ServiceError::NotFound("missing".to_string()),
            StatusCode::NOT_FOUND,
        ),
        (
            ServiceError::InvalidInput("bad".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (
            ServiceError::Unauthorized("who".to_string()),
            StatusCode::UNAUTHORIZED,
        ),
        (
            ServiceError::Forbidden("no".to_string()),
            StatusCode::FORBIDDEN,
        ),
        (
            ServiceError::Conflict("dup".to_string()),
            StatusCode::CONFLICT,
        ),
        (
            ServiceError::InternalError("boom".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (service_error, expected_status) in cases {
        let handler_error: HandlerError = service_error.into();
        let response = handler_error.into_response();
        assert_eq!(response.status(), expected_status);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
    }
}
