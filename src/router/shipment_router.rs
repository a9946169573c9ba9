use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::handler::shipment_handler::{
    create_shipment_handler, delete_shipment_handler, get_shipment_by_tracking_handler,
    list_shipments_handler, update_shipment_handler,
};
use crate::middlewares::auth_middleware::{protect, require_admin, AuthState};
use crate::service::shipment_service::ShipmentServiceImpl;

pub fn shipment_router(service: Arc<ShipmentServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // Authed reads; the GET below takes a tracking number in the {id} slot
    let private = Router::new()
        .route("/api/shipments", get(list_shipments_handler))
        .route("/api/shipments/{id}", get(get_shipment_by_tracking_handler))
        .route_layer(middleware::from_fn_with_state(auth_state.clone(), protect));

    let admin = Router::new()
        .route("/api/shipments", post(create_shipment_handler))
        .route(
            "/api/shipments/{id}",
            put(update_shipment_handler).delete(delete_shipment_handler),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth_state, protect));

    private.merge(admin).with_state(service)
}
