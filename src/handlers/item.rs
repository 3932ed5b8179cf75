//! Bucketlist item 管理的 HTTP 处理器
//! 每个操作先校验 bucketlist 归属于当前用户，越权一律表现为 404

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::bucketlist::PageQuery,
    models::item::*,
    models::validate_not_blank,
    repository::{BucketlistRepository, ItemRepository},
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

/// 校验 bucketlist 属于当前用户
async fn ensure_owned(
    state: &AppState,
    bucketlist_id: i64,
    user_id: i64,
) -> Result<(), AppError> {
    let repo = BucketlistRepository::new(state.db.clone());
    repo.find_for_user(bucketlist_id, user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(())
}

/// 列出 bucketlist 中的 items（分页 + 按名称搜索）
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    ensure_owned(&state, id, auth_context.user_id).await?;

    let (limit, offset) = query.bounds();
    let q = query.q.as_deref();

    let repo = ItemRepository::new(state.db.clone());
    let total = repo.count(id, q).await?;
    let items = repo.list(id, q, limit, offset).await?;

    Ok(Json(json!({
        "items": items,
        "page": query.page(),
        "per_page": limit,
        "total": total
    })))
}

/// 在 bucketlist 中添加 item
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
    Json(req): Json<CreateItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    validate_not_blank("name", &req.name)?;

    ensure_owned(&state, id, auth_context.user_id).await?;

    let repo = ItemRepository::new(state.db.clone());
    let item = repo.create(id, req.name.trim()).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// 获取 item 详情
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path((id, item_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    ensure_owned(&state, id, auth_context.user_id).await?;

    let repo = ItemRepository::new(state.db.clone());
    let item = repo
        .find_in_bucketlist(item_id, id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(item))
}

/// 更新 item
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path((id, item_id)): Path<(i64, i64)>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    validate_not_blank("name", &req.name)?;

    ensure_owned(&state, id, auth_context.user_id).await?;

    let repo = ItemRepository::new(state.db.clone());
    let item = repo
        .update(item_id, id, req.name.trim())
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "message": "Item updated successfully",
        "item": item
    })))
}

/// 删除 item
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path((id, item_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    ensure_owned(&state, id, auth_context.user_id).await?;

    let repo = ItemRepository::new(state.db.clone());
    let deleted = repo.delete(item_id, id).await?;

    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "message": "Item deleted successfully"
    })))
}
