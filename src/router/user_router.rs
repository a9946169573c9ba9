use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handler::user_handler::{
    login_handler, logout_handler, profile_handler, refresh_token_handler, register_handler,
    update_profile_handler,
};
use crate::middlewares::auth_middleware::{protect, AuthState};
use crate::service::user_service::UserServiceImpl;

pub fn user_router(service: Arc<UserServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    let public = Router::new()
        .route("/api/users/register", post(register_handler))
        .route("/api/users/login", post(login_handler))
        .route("/api/users/refresh-token", post(refresh_token_handler))
        .route("/api/users/logout", post(logout_handler));

    let private = Router::new()
        .route(
            "/api/users/profile",
            get(profile_handler).put(update_profile_handler),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, protect));

    public.merge(private).with_state(service)
}
