use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::handler::tracking_handler::{
    create_tracking_event_handler, delete_tracking_event_handler, shipment_history_handler,
};
use crate::middlewares::auth_middleware::{protect, require_admin, AuthState};
use crate::service::tracking_service::TrackingServiceImpl;

pub fn tracking_router(service: Arc<TrackingServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // Owner or admin: tracking history by shipment id
    let private = Router::new()
        .route("/api/tracking/{id}", get(shipment_history_handler))
        .route_layer(middleware::from_fn_with_state(auth_state.clone(), protect));

    let admin = Router::new()
        .route("/api/tracking", post(create_tracking_event_handler))
        .route("/api/tracking/{id}", delete(delete_tracking_event_handler))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth_state, protect));

    private.merge(admin).with_state(service)
}
