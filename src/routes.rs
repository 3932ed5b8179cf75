//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

use crate::{handlers, middleware::AppState};

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    // 公开端点（健康检查与指标）
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(handlers::metrics::metrics_export));

    // 认证路由（无需携带 Authorization 头；logout/reset 的令牌在请求体中校验）
    let auth_routes = Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/reset-password", post(handlers::auth::reset_password));

    // 需要认证的路由
    let protected_routes = Router::new()
        .route(
            "/bucketlists/",
            get(handlers::bucketlist::list_bucketlists)
                .post(handlers::bucketlist::create_bucketlist),
        )
        .route(
            "/bucketlists/{id}",
            get(handlers::bucketlist::get_bucketlist)
                .put(handlers::bucketlist::update_bucketlist)
                .delete(handlers::bucketlist::delete_bucketlist),
        )
        .route(
            "/bucketlists/{id}/items/",
            get(handlers::item::list_items).post(handlers::item::create_item),
        )
        .route(
            "/bucketlists/{id}/items/{item_id}",
            get(handlers::item::get_item)
                .put(handlers::item::update_item)
                .delete(handlers::item::delete_item),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::auth::middleware::auth_middleware,
        ));

    // 组合所有路由
    Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .merge(protected_routes)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(crate::middleware::request_tracking_middleware))
        .with_state(state)
}
