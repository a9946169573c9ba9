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

use crate::dto::contact_dto::{CreateContactMessageRequest, UpdateMessageStatusRequest};
use crate::service::contact_service::{ContactService, ContactServiceImpl};
use crate::util::error::HandlerError;

// Public: contact form submission
pub async fn create_contact_message_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Json(payload): Json<CreateContactMessageRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let message = service.submit_message(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Message sent successfully.",
            "data": message,
        })),
    ))
}

// Admin: inbox, newest first
pub async fn list_contact_messages_handler(
    State(service): State<Arc<ContactServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let messages = service.list_messages().await?;
    Ok(Json(json!({ "success": true, "messages": messages })))
}

// Admin: single message
pub async fn get_contact_message_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id =
        ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid message id"))?;
    let message = service.get_message(id).await?;
    Ok(Json(json!({ "success": true, "message": message })))
}

// Admin: move a message through pending/reviewed/resolved
pub async fn update_message_status_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateMessageStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id =
        ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid message id"))?;
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let message = service.update_message_status(id, payload.status).await?;
    Ok(Json(json!({ "success": true, "message": message })))
}

// Admin: delete a message
pub async fn delete_contact_message_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id =
        ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid message id"))?;
    service.delete_message(id).await?;
    Ok(Json(
        json!({ "success": true, "message": "Contact message deleted." }),
    ))
}
