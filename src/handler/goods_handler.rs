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

use crate::dto::goods_dto::{CreateGoodsTypeRequest, UpdateGoodsTypeRequest};
use crate::service::goods_service::{GoodsService, GoodsServiceImpl};
use crate::util::error::HandlerError;

// Admin: add a goods type
pub async fn create_goods_type_handler(
    State(service): State<Arc<GoodsServiceImpl>>,
    Json(payload): Json<CreateGoodsTypeRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let goods_type = service.create_goods_type(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "goodsType": goods_type })),
    ))
}

// Public: active goods types for form dropdowns
pub async fn list_goods_types_handler(
    State(service): State<Arc<GoodsServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let types = service.list_goods_types().await?;
    Ok(Json(json!({ "success": true, "types": types })))
}

// Admin: update a goods type
pub async fn update_goods_type_handler(
    State(service): State<Arc<GoodsServiceImpl>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateGoodsTypeRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id =
        ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid goods type id"))?;
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let goods_type = service.update_goods_type(id, payload).await?;
    Ok(Json(json!({ "success": true, "goodsType": goods_type })))
}

// Admin: delete a goods type
pub async fn delete_goods_type_handler(
    State(service): State<Arc<GoodsServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id =
        ObjectId::parse_str(&id).map_err(|_| HandlerError::bad_request("Invalid goods type id"))?;
    service.delete_goods_type(id).await?;
    Ok(Json(
        json!({ "success": true, "message": "Goods type deleted." }),
    ))
}
