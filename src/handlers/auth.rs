//! 认证相关的 HTTP 处理器

use crate::{
    error::AppError,
    middleware::AppState,
    models::{auth::*, user::RegisterRequest, validate_not_blank},
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

/// 注册
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.auth_service.register(req).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// 登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.login(req).await?;

    Ok(Json(response))
}

/// 登出
/// 令牌通过请求体提交，校验通过后登记为已撤销
pub async fn logout(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LogoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_not_blank("access_token", &req.access_token)?;

    state.auth_service.logout(&req.access_token).await?;

    Ok(Json(json!({"message": "You logged out successfully"})))
}

/// 密码重置
pub async fn reset_password(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_not_blank("access_token", &req.access_token)?;

    state
        .auth_service
        .reset_password(&req.access_token, &req.password)
        .await?;

    Ok(Json(json!({"message": "Password reset successfully. Please login again"})))
}
