use std::sync::Arc;

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use tracing::{error, info, instrument};

use crate::dto::user_dto::{PublicUser, UpdateProfileRequest};
use crate::model::user::User;
use crate::repository::user_repo::{UserRepository, UserRepositoryImpl};
use crate::util::error::ServiceError;
use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl, TokenPair};
use crate::util::password::{PasswordUtils, PasswordUtilsImpl};

#[derive(Debug, Clone, serde::Serialize)]
pub struct UserAuthResponse {
    pub user: PublicUser,
    pub tokens: TokenPair,
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn register(&self, user: User, password: String) -> Result<UserAuthResponse, ServiceError>;
    async fn login(&self, email: String, password: String) -> Result<UserAuthResponse, ServiceError>;
    async fn refresh_token(&self, refresh_token: String) -> Result<TokenPair, ServiceError>;
    async fn update_profile(
        &self,
        user_id: ObjectId,
        update: UpdateProfileRequest,
    ) -> Result<PublicUser, ServiceError>;
}

pub struct UserServiceImpl {
    pub user_repo: Arc<UserRepositoryImpl>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<UserRepositoryImpl>, jwt_utils: Arc<JwtTokenUtilsImpl>) -> Self {
        Self { user_repo, jwt_utils }
    }

    fn token_pair_for(&self, user: &User) -> Result<TokenPair, ServiceError> {
        let id = user.id.as_ref().map(|id| id.to_hex()).unwrap_or_default();
        self.jwt_utils
            .generate_token_pair(&id, &user.email, &user.role)
            .map_err(|e| ServiceError::InternalError(format!("JWT error: {}", e)))
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self, user, password), fields(email = %user.email))]
    async fn register(&self, mut user: User, password: String) -> Result<UserAuthResponse, ServiceError> {
        info!("Registering new user");
        user.email = user.email.to_lowercase();
        if self.user_repo.find_by_email(&user.email).await?.is_some() {
            return Err(ServiceError::Conflict(
                "User with this email already exists.".to_string(),
            ));
        }

        let hash = PasswordUtilsImpl::hash_password(&password)
            .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?;
        user.password_hash = hash;

        let inserted = self.user_repo.insert(user).await;
        match &inserted {
            Ok(_) => info!("User registered successfully"),
            Err(e) => error!("Failed to insert user: {e}"),
        }
        let inserted = inserted?;

        let tokens = self.token_pair_for(&inserted)?;
        Ok(UserAuthResponse {
            user: PublicUser::from(inserted),
            tokens,
        })
    }

    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: String, password: String) -> Result<UserAuthResponse, ServiceError> {
        info!("User login attempt");
        let user = self
            .user_repo
            .find_by_email(&email.to_lowercase())
            .await?
            .ok_or_else(|| ServiceError::Unauthorized("Invalid credentials.".to_string()))?;

        let valid = PasswordUtilsImpl::verify_password(&password, &user.password_hash)
            .map_err(|e| ServiceError::InternalError(format!("Password verify error: {}", e)))?;
        if !valid {
            error!("Invalid credentials for user: {}", email);
            return Err(ServiceError::Unauthorized("Invalid credentials.".to_string()));
        }

        let tokens = self.token_pair_for(&user)?;
        info!("User logged in successfully");
        Ok(UserAuthResponse {
            user: PublicUser::from(user),
            tokens,
        })
    }

    #[instrument(skip(self, refresh_token))]
    async fn refresh_token(&self, refresh_token: String) -> Result<TokenPair, ServiceError> {
        let claims = self
            .jwt_utils
            .validate_refresh_token(&refresh_token)
            .map_err(|e| ServiceError::Unauthorized(format!("Invalid refresh token: {}", e)))?;
        self.jwt_utils
            .generate_token_pair(&claims.sub, &claims.email, &claims.role)
            .map_err(|e| ServiceError::InternalError(format!("JWT error: {}", e)))
    }

    #[instrument(skip(self, update), fields(user_id = %user_id))]
    async fn update_profile(
        &self,
        user_id: ObjectId,
        update: UpdateProfileRequest,
    ) -> Result<PublicUser, ServiceError> {
        info!("Updating user profile");
        let current = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found.".to_string()))?;

        // Absent fields keep their stored values
        let fields = doc! {
            "name": update.name.unwrap_or(current.name),
            "phone": update.phone.or(current.phone),
            "companyName": update.company_name.or(current.company_name),
            "address": update.address.or(current.address),
        };
        let updated = self.user_repo.update_fields(user_id, fields).await?;
        Ok(PublicUser::from(updated))
    }
}
