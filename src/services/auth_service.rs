//! 认证服务：注册、登录、登出、密码重置

use crate::{
    auth::jwt::JwtService,
    auth::password::PasswordHasher,
    auth::revocation::RevocationList,
    error::AppError,
    models::{auth::*, user::*, validate_not_blank},
    repository::UserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

pub struct AuthService {
    db: PgPool,
    jwt_service: Arc<JwtService>,
    revocation: Arc<RevocationList>,
}

impl AuthService {
    pub fn new(db: PgPool, jwt_service: Arc<JwtService>, revocation: Arc<RevocationList>) -> Self {
        Self {
            db,
            jwt_service,
            revocation,
        }
    }

    /// 用户注册
    pub async fn register(&self, req: RegisterRequest) -> Result<UserResponse, AppError> {
        req.validate()?;
        validate_not_blank("password", &req.password)?;

        let hasher = PasswordHasher::new();
        let password_hash = hasher.hash(&req.password)?;

        let user_repo = UserRepository::new(self.db.clone());
        let user = user_repo.create(&req.email, &password_hash).await?;

        tracing::info!(user_id = user.id, "User registered");

        Ok(UserResponse::from(user))
    }

    /// 用户登录
    /// 未知邮箱与密码错误返回同一条消息，避免泄露账户是否存在
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        req.validate()?;
        validate_not_blank("password", &req.password)?;

        let user_repo = UserRepository::new(self.db.clone());
        let user = user_repo
            .find_by_email(&req.email)
            .await?
            .ok_or_else(|| {
                AppError::Authentication("Verify credentials and try again".to_string())
            })?;

        let hasher = PasswordHasher::new();
        if !hasher.verify(&req.password, &user.password_hash)? {
            return Err(AppError::Authentication(
                "Verify credentials and try again".to_string(),
            ));
        }

        let access_token = self.jwt_service.issue(user.id)?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginResponse {
            message: "You logged in successfully".to_string(),
            access_token,
            expires_in: self.jwt_service.expires_in(),
        })
    }

    /// 登出：校验提交的令牌并将其登记为已撤销
    pub async fn logout(&self, access_token: &str) -> Result<(), AppError> {
        let claims = self.verify_live_token(access_token)?;

        self.revocation.revoke(access_token);

        tracing::info!(user_id = claims.sub, "User logged out");

        Ok(())
    }

    /// 密码重置：校验令牌，覆盖密码哈希，并撤销本次使用的令牌。
    /// 此前签发的其他令牌保持有效，需要客户端自行登出。
    pub async fn reset_password(&self, access_token: &str, password: &str) -> Result<(), AppError> {
        validate_not_blank("password", password)?;

        let claims = self.verify_live_token(access_token)?;

        let user_repo = UserRepository::new(self.db.clone());
        let user = user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::Unauthorized)?;

        let hasher = PasswordHasher::new();
        let password_hash = hasher.hash(password)?;
        user_repo.update_password(user.id, &password_hash).await?;

        // 重置用掉的令牌作废，持有它的客户端必须重新登录
        self.revocation.revoke(access_token);

        tracing::info!(user_id = user.id, "Password reset");

        Ok(())
    }

    /// 校验令牌既未被撤销也未过期，返回其 claims
    fn verify_live_token(&self, access_token: &str) -> Result<crate::auth::jwt::Claims, AppError> {
        if self.revocation.is_revoked(access_token) {
            return Err(AppError::Authentication(
                "Token has been revoked. Please login to get a new token".to_string(),
            ));
        }

        Ok(self.jwt_service.decode(access_token)?)
    }
}
