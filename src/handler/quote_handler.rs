use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bson::oid::ObjectId;
use serde_json::json;
use validator::Validate;

use crate::dto::quote_dto::{CreateQuoteRequest, UpdateQuoteStatusRequest};
use crate::dto::user_dto::PublicUser;
use crate::service::quote_service::{QuoteService, QuoteServiceImpl};
use crate::util::error::HandlerError;

// Customer: submit a quote request
pub async fn create_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Extension(user): Extension<PublicUser>,
    Json(payload): Json<CreateQuoteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let user_id = user
        .id
        .ok_or_else(|| HandlerError::internal("Session user has no id"))?;
    let quote = service.submit_quote(user_id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "quote": quote })),
    ))
}

// Customer: own quote requests, newest first
pub async fn my_quotes_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Extension(user): Extension<PublicUser>,
) -> Result<impl IntoResponse, HandlerError> {
    let user_id = user
        .id
        .ok_or_else(|| HandlerError::internal("Session user has no id"))?;
    let quotes = service.my_quotes(user_id).await?;
    Ok(Json(json!({ "success": true, "quotes": quotes })))
}

// Admin: all quote requests
pub async fn list_quotes_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, HandlerError> {
    let page = params.get("page").and_then(|v| v.parse().ok()).unwrap_or(1);
    let limit = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(20);
    let quotes = service.list_quotes(page, limit).await?;
    Ok(Json(json!({ "success": true, "quotes": quotes })))
}

// Admin: price or reject a quote
pub async fn update_quote_status_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateQuoteStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid quote id"))?;
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let quote = service.update_quote_status(id, payload).await?;
    Ok(Json(json!({ "success": true, "quote": quote })))
}
