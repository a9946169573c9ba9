use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use bson::oid::ObjectId;
use tracing::debug;

use crate::dto::user_dto::PublicUser;
use crate::model::user::ROLE_ADMIN;
use crate::repository::user_repo::{UserRepository, UserRepositoryImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};

pub struct AuthState {
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
    pub user_repo: Arc<UserRepositoryImpl>,
}

/// Token from the HttpOnly `token` cookie, falling back to the
/// `Authorization: Bearer` header.
fn token_from_request(state: &AuthState, req: &Request<Body>) -> Option<String> {
    if let Some(cookie_header) = req
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
    {
        for pair in cookie_header.split(';') {
            if let Some(value) = pair.trim().strip_prefix("token=") {
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| state.jwt_utils.extract_token_from_header(h).ok())
}

/// Verifies the JWT, loads the account, and attaches it (sans password hash)
/// to the request extensions.
pub async fn protect(
    State(state): State<Arc<AuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, HandlerError> {
    let token = token_from_request(&state, &req)
        .ok_or_else(|| HandlerError::unauthorized("Unauthorized: Token not found"))?;

    let claims = state.jwt_utils.validate_access_token(&token).map_err(|e| {
        debug!("Token validation failed: {}", e);
        HandlerError::unauthorized("Unauthorized: Invalid or expired token")
    })?;

    let user_id = ObjectId::parse_str(&claims.sub)
        .map_err(|_| HandlerError::unauthorized("Unauthorized: Invalid or expired token"))?;

    let user = state
        .user_repo
        .find_by_id(&user_id)
        .await
        .map_err(|e| HandlerError::internal(e.to_string()))?
        .ok_or_else(|| HandlerError::unauthorized("Unauthorized: User not found"))?;

    req.extensions_mut().insert(PublicUser::from(user));
    Ok(next.run(req).await)
}

/// Gate for admin-only routes. Must run after `protect`.
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, HandlerError> {
    let user = req
        .extensions()
        .get::<PublicUser>()
        .ok_or_else(|| HandlerError::unauthorized("Unauthorized: Token not found"))?;

    if user.role != ROLE_ADMIN {
        return Err(HandlerError::forbidden("Forbidden: Admins only"));
    }
    Ok(next.run(req).await)
}
