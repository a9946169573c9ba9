use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::handler::location_handler::{
    create_location_handler, delete_location_handler, get_location_handler,
    list_locations_handler, update_location_handler,
};
use crate::middlewares::auth_middleware::{protect, require_admin, AuthState};
use crate::service::location_service::LocationServiceImpl;

pub fn location_router(service: Arc<LocationServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // Public browsing for quote forms and maps
    let public = Router::new()
        .route("/api/locations", get(list_locations_handler))
        .route("/api/locations/{id}", get(get_location_handler));

    let admin = Router::new()
        .route("/api/locations", post(create_location_handler))
        .route(
            "/api/locations/{id}",
            put(update_location_handler).delete(delete_location_handler),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth_state, protect));

    public.merge(admin).with_state(service)
}
