use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::handler::quote_handler::{
    create_quote_handler, list_quotes_handler, my_quotes_handler, update_quote_status_handler,
};
use crate::middlewares::auth_middleware::{protect, require_admin, AuthState};
use crate::service::quote_service::QuoteServiceImpl;

pub fn quote_router(service: Arc<QuoteServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // Customers: submit and view their own quotes
    let customer = Router::new()
        .route("/api/quotes", post(create_quote_handler))
        .route("/api/quotes/my", get(my_quotes_handler))
        .route_layer(middleware::from_fn_with_state(auth_state.clone(), protect));

    // Admins: review and price quotes
    let admin = Router::new()
        .route("/api/quotes", get(list_quotes_handler))
        .route("/api/quotes/{id}", put(update_quote_status_handler))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth_state, protect));

    customer.merge(admin).with_state(service)
}
