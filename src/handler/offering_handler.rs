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

use crate::dto::offering_dto::{CreateServiceRequest, UpdateServiceRequest};
use crate::service::offering_service::{OfferingService, OfferingServiceImpl};
use crate::util::error::HandlerError;

// Public: active services for the marketing pages
pub async fn list_services_handler(
    State(service): State<Arc<OfferingServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let services = service.list_active_services().await?;
    let message = if services.is_empty() {
        "No active services found."
    } else {
        "Active services retrieved successfully."
    };
    Ok(Json(json!({
        "success": true,
        "services": services,
        "message": message,
    })))
}

// Admin: add a service
pub async fn create_service_handler(
    State(service): State<Arc<OfferingServiceImpl>>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let created = service.create_service(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "service": created,
            "message": "Service created successfully.",
        })),
    ))
}

// Admin: update a service
pub async fn update_service_handler(
    State(service): State<Arc<OfferingServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id =
        ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid service id"))?;
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let updated = service.update_service(id, payload).await?;
    Ok(Json(json!({
        "success": true,
        "service": updated,
        "message": "Service updated successfully.",
    })))
}

// Admin: delete a service
pub async fn delete_service_handler(
    State(service): State<Arc<OfferingServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id =
        ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid service id"))?;
    service.delete_service(id).await?;
    Ok(Json(
        json!({ "success": true, "message": "Service deleted successfully." }),
    ))
}
