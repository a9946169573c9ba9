use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::handler::offering_handler::{
    create_service_handler, delete_service_handler, list_services_handler, update_service_handler,
};
use crate::middlewares::auth_middleware::{protect, require_admin, AuthState};
use crate::service::offering_service::OfferingServiceImpl;

pub fn offering_router(service: Arc<OfferingServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    let public = Router::new().route("/api/services", get(list_services_handler));

    let admin = Router::new()
        .route("/api/services", post(create_service_handler))
        .route(
            "/api/services/{id}",
            put(update_service_handler).delete(delete_service_handler),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth_state, protect));

    public.merge(admin).with_state(service)
}
