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

use crate::dto::tracking_dto::CreateTrackingEventRequest;
use crate::dto::user_dto::PublicUser;
use crate::service::tracking_service::{TrackingService, TrackingServiceImpl};
use crate::util::error::HandlerError;

// Admin: record a tracking checkpoint
pub async fn create_tracking_event_handler(
    State(service): State<Arc<TrackingServiceImpl>>,
    Extension(user): Extension<PublicUser>,
    Json(payload): Json<CreateTrackingEventRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let user_id = user
        .id
        .ok_or_else(|| HandlerError::internal("Session user has no id"))?;
    let event = service.record_event(user_id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Tracking event created successfully",
            "event": event,
        })),
    ))
}

// Authed: tracking history for a shipment (owner or admin)
pub async fn shipment_history_handler(
    State(service): State<Arc<TrackingServiceImpl>>,
    Extension(user): Extension<PublicUser>,
    Path((shipment_id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let shipment_id = ObjectId::parse_str(&shipment_id)
        .map_err(|_| HandlerError::bad_request("Invalid shipment id"))?;
    let user_id = user
        .id
        .ok_or_else(|| HandlerError::internal("Session user has no id"))?;

    let events = service
        .history_for_shipment(user_id, &user.role, shipment_id)
        .await?;
    Ok(Json(json!({ "success": true, "events": events })))
}

// Admin: delete a tracking event
pub async fn delete_tracking_event_handler(
    State(service): State<Arc<TrackingServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = ObjectId::parse_str(&id)
        .map_err(|_| HandlerError::bad_request("Invalid tracking event id"))?;
    service.delete_event(id).await?;
    Ok(Json(
        json!({ "success": true, "message": "Tracking event deleted." }),
    ))
}
