use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bson::oid::ObjectId;
use serde_json::json;
use validator::Validate;

use crate::dto::container_dto::{CreateContainerTypeRequest, UpdateContainerTypeRequest};
use crate::service::container_service::{ContainerService, ContainerServiceImpl};
use crate::util::error::HandlerError;

// Admin: add a container type to the catalog
pub async fn create_container_type_handler(
    State(service): State<Arc<ContainerServiceImpl>>,
    Json(payload): Json<CreateContainerTypeRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let container = service.create_container_type(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "container": container })),
    ))
}

// Public: catalog (only active unless ?showAll=true)
pub async fn list_container_types_handler(
    State(service): State<Arc<ContainerServiceImpl>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, HandlerError> {
    let show_all = params.get("showAll").map(|v| v == "true").unwrap_or(false);
    let types = service.list_container_types(show_all).await?;
    Ok(Json(json!({ "success": true, "types": types })))
}

// Admin: update a container type
pub async fn update_container_type_handler(
    State(service): State<Arc<ContainerServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateContainerTypeRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = ObjectId::parse_str(&id)
        .map_err(|_| HandlerError::bad_request("Invalid container type id"))?;
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let container = service.update_container_type(id, payload).await?;
    Ok(Json(json!({ "success": true, "container": container })))
}

// Admin: delete a container type
pub async fn delete_container_type_handler(
    State(service): State<Arc<ContainerServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = ObjectId::parse_str(&id)
        .map_err(|_| HandlerError::bad_request("Invalid container type id"))?;
    service.delete_container_type(id).await?;
    Ok(Json(
        json!({ "success": true, "message": "Container type deleted." }),
    ))
}
