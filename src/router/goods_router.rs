use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::handler::goods_handler::{
    create_goods_type_handler, delete_goods_type_handler, list_goods_types_handler,
    update_goods_type_handler,
};
use crate::middlewares::auth_middleware::{protect, require_admin, AuthState};
use crate::service::goods_service::GoodsServiceImpl;

pub fn goods_router(service: Arc<GoodsServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // Open for form dropdowns
    let public = Router::new().route("/api/goods", get(list_goods_types_handler));

    let admin = Router::new()
        .route("/api/goods", post(create_goods_type_handler))
        .route(
            "/api/goods/{id}",
            put(update_goods_type_handler).delete(delete_goods_type_handler),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth_state, protect));

    public.merge(admin).with_state(service)
}
