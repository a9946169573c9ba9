use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::handler::container_handler::{
    create_container_type_handler, delete_container_type_handler, list_container_types_handler,
    update_container_type_handler,
};
use crate::middlewares::auth_middleware::{protect, require_admin, AuthState};
use crate::service::container_service::ContainerServiceImpl;

pub fn container_router(service: Arc<ContainerServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    let public = Router::new().route("/api/containers", get(list_container_types_handler));

    let admin = Router::new()
        .route("/api/containers", post(create_container_type_handler))
        .route(
            "/api/containers/{id}",
            put(update_container_type_handler).delete(delete_container_type_handler),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth_state, protect));

    public.merge(admin).with_state(service)
}
