//! Bucketlist 管理的 HTTP 处理器

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::{bucketlist::*, validate_not_blank},
    repository::BucketlistRepository,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

/// 列出当前用户的 bucketlists（分页 + 按名称搜索）
pub async fn list_bucketlists(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (limit, offset) = query.bounds();
    let q = query.q.as_deref();

    let repo = BucketlistRepository::new(state.db.clone());
    let total = repo.count(auth_context.user_id, q).await?;
    let bucketlists = repo.list(auth_context.user_id, q, limit, offset).await?;

    Ok(Json(json!({
        "bucketlists": bucketlists,
        "page": query.page(),
        "per_page": limit,
        "total": total
    })))
}

/// 创建 bucketlist
pub async fn create_bucketlist(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Json(req): Json<CreateBucketlistRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    validate_not_blank("name", &req.name)?;

    let repo = BucketlistRepository::new(state.db.clone());
    let bucketlist = repo.create(auth_context.user_id, req.name.trim()).await?;

    Ok((StatusCode::CREATED, Json(bucketlist)))
}

/// 获取 bucketlist 详情
pub async fn get_bucketlist(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = BucketlistRepository::new(state.db.clone());
    let bucketlist = repo
        .find_for_user(id, auth_context.user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(bucketlist))
}

/// 更新 bucketlist
pub async fn update_bucketlist(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBucketlistRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    validate_not_blank("name", &req.name)?;

    let repo = BucketlistRepository::new(state.db.clone());
    let bucketlist = repo
        .update(id, auth_context.user_id, req.name.trim())
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "message": "Bucketlist updated successfully",
        "bucketlist": bucketlist
    })))
}

/// 删除 bucketlist
pub async fn delete_bucketlist(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = BucketlistRepository::new(state.db.clone());
    let deleted = repo.delete(id, auth_context.user_id).await?;

    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "message": "Bucketlist deleted successfully"
    })))
}
