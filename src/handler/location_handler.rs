use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bson::oid::ObjectId;
use serde_json::json;
use validator::Validate;

use crate::dto::location_dto::{CreateLocationRequest, UpdateLocationRequest};
use crate::service::location_service::{LocationService, LocationServiceImpl};
use crate::util::error::HandlerError;

// Admin: add a pickup or drop-off location
pub async fn create_location_handler(
    State(service): State<Arc<LocationServiceImpl>>,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let location = service.create_location(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "location": location })),
    ))
}

// Public: browse all locations
pub async fn list_locations_handler(
    State(service): State<Arc<LocationServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let locations = service.list_locations().await?;
    Ok(Json(json!({ "success": true, "locations": locations })))
}

// Public: single location
pub async fn get_location_handler(
    State(service): State<Arc<LocationServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id =
        ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid location id"))?;
    let location = service.get_location(id).await?;
    Ok(Json(json!({ "success": true, "location": location })))
}

// Admin: update a location
pub async fn update_location_handler(
    State(service): State<Arc<LocationServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateLocationRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id =
        ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid location id"))?;
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let location = service.update_location(id, payload).await?;
    Ok(Json(json!({ "success": true, "location": location })))
}

// Admin: delete a location
pub async fn delete_location_handler(
    State(service): State<Arc<LocationServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id =
        ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid location id"))?;
    service.delete_location(id).await?;
    Ok(Json(json!({ "success": true, "message": "Location deleted" })))
}
