use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bson::oid::ObjectId;
use serde_json::json;
use validator::Validate;

use crate::dto::shipment_dto::{CreateShipmentRequest, UpdateShipmentRequest};
use crate::dto::user_dto::PublicUser;
use crate::service::shipment_service::{ShipmentService, ShipmentServiceImpl};
use crate::util::error::HandlerError;

// Admin: create a shipment from an approved quote
pub async fn create_shipment_handler(
    State(service): State<Arc<ShipmentServiceImpl>>,
    Json(payload): Json<CreateShipmentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let shipment = service.create_shipment(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "shipment": shipment })),
    ))
}

// Authed: admin sees all shipments, customers only their own
pub async fn list_shipments_handler(
    State(service): State<Arc<ShipmentServiceImpl>>,
    Extension(user): Extension<PublicUser>,
) -> Result<impl IntoResponse, HandlerError> {
    let user_id = user
        .id
        .ok_or_else(|| HandlerError::internal("Session user has no id"))?;
    let shipments = service.list_shipments(user_id, &user.role).await?;
    Ok(Json(json!({ "success": true, "shipments": shipments })))
}

// Authed: look up one shipment by tracking number (owner or admin)
pub async fn get_shipment_by_tracking_handler(
    State(service): State<Arc<ShipmentServiceImpl>>,
    Extension(user): Extension<PublicUser>,
    Path((tracking_number,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let user_id = user
        .id
        .ok_or_else(|| HandlerError::internal("Session user has no id"))?;
    let shipment = service
        .get_by_tracking_number(user_id, &user.role, &tracking_number)
        .await?;
    Ok(Json(json!({ "success": true, "shipment": shipment })))
}

// Admin: update a shipment
pub async fn update_shipment_handler(
    State(service): State<Arc<ShipmentServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateShipmentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id =
        ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid shipment id"))?;
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let shipment = service.update_shipment(id, payload).await?;
    Ok(Json(json!({ "success": true, "shipment": shipment })))
}

// Admin: delete a shipment
pub async fn delete_shipment_handler(
    State(service): State<Arc<ShipmentServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id =
        ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid shipment id"))?;
    service.delete_shipment(id).await?;
    Ok(Json(json!({ "success": true, "message": "Shipment deleted" })))
}
