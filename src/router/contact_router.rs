use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::handler::contact_handler::{
    create_contact_message_handler, delete_contact_message_handler, get_contact_message_handler,
    list_contact_messages_handler, update_message_status_handler,
};
use crate::middlewares::auth_middleware::{protect, require_admin, AuthState};
use crate::service::contact_service::ContactServiceImpl;

pub fn contact_router(service: Arc<ContactServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // Public contact form
    let public = Router::new().route("/api/contact", post(create_contact_message_handler));

    let admin = Router::new()
        .route("/api/contact", get(list_contact_messages_handler))
        .route(
            "/api/contact/{id}",
            get(get_contact_message_handler).delete(delete_contact_message_handler),
        )
        .route(
            "/api/contact/{id}/status",
            put(update_message_status_handler),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth_state, protect));

    public.merge(admin).with_state(service)
}
