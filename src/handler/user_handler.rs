use std::sync::Arc;

use axum::{
    extract::{Extension, Json, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::dto::user_dto::{
    is_valid_phone, LoginRequest, PublicUser, RefreshTokenRequest, RegisterRequest,
    UpdateProfileRequest,
};
use crate::model::user::{User, ROLE_CUSTOMER};
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::error::HandlerError;

/// HttpOnly session cookie carrying the access token.
fn auth_cookie(token: &str, max_age_secs: i64) -> String {
    let secure = match std::env::var("APP_ENV") {
        Ok(env) if env == "production" => "; Secure",
        _ => "",
    };
    format!(
        "token={}; HttpOnly; SameSite=Strict; Path=/; Max-Age={}{}",
        token, max_age_secs, secure
    )
}

fn check_optional_phone(phone: &Option<String>) -> Result<(), HandlerError> {
    if let Some(phone) = phone {
        if !is_valid_phone(phone) {
            return Err(HandlerError::bad_request(
                "Please enter a valid phone number.",
            ));
        }
    }
    Ok(())
}

// Register (customers only; admins are seeded from config)
pub async fn register_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }
    check_optional_phone(&payload.phone)?;

    let user = User {
        id: None,
        name: payload.name,
        email: payload.email,
        password_hash: String::new(),
        phone: payload.phone,
        company_name: payload.company_name.map(|s| s.trim().to_string()),
        address: payload.address.map(|s| s.trim().to_string()),
        role: ROLE_CUSTOMER.to_string(),
        created_at: None,
        updated_at: None,
    };

    let res = service.register(user, payload.password).await?;
    let cookie = auth_cookie(&res.tokens.access_token, res.tokens.expires_in);
    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(json!({
            "success": true,
            "token": res.tokens.access_token,
            "refreshToken": res.tokens.refresh_token,
            "user": res.user,
        })),
    ))
}

// Login
pub async fn login_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let res = service.login(payload.email, payload.password).await?;
    let cookie = auth_cookie(&res.tokens.access_token, res.tokens.expires_in);
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(json!({
            "success": true,
            "token": res.tokens.access_token,
            "refreshToken": res.tokens.refresh_token,
            "user": res.user,
        })),
    ))
}

// Refresh Token
pub async fn refresh_token_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }

    let tokens = service.refresh_token(payload.refresh_token).await?;
    Ok(Json(json!({ "success": true, "tokens": tokens })))
}

// Current user's profile (loaded by the protect middleware)
pub async fn profile_handler(
    Extension(user): Extension<PublicUser>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(json!({ "success": true, "user": user })))
}

// Update current user's profile
pub async fn update_profile_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Extension(user): Extension<PublicUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    if let Err(e) = payload.validate() {
        return Err(HandlerError::bad_request(format!("Validation error: {}", e)));
    }
    check_optional_phone(&payload.phone)?;

    let user_id = user
        .id
        .ok_or_else(|| HandlerError::internal("Session user has no id"))?;
    let updated = service.update_profile(user_id, payload).await?;
    Ok(Json(json!({ "success": true, "user": updated })))
}

// Logout (clears the session cookie)
pub async fn logout_handler() -> Result<impl IntoResponse, HandlerError> {
    let cookie = auth_cookie("", 0);
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(json!({ "success": true, "message": "Logged out successfully." })),
    ))
}
