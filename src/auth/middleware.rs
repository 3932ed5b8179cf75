//! 请求认证中间件
//! 提取令牌 → 查撤销登记表 → 校验签名与过期 → 注入认证上下文

use crate::{error::AppError, middleware::AppState};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// 认证上下文（附加到请求扩展）
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub user_id: i64,
}

// 实现 FromRequestParts 以便在 handler 中直接提取 AuthContext
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .copied()
            .ok_or(AppError::Unauthorized)
    }
}

/// 从 Authorization 头提取令牌
/// 标准形式为 "Bearer <token>"，为兼容旧客户端也接受裸令牌
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("authorization")?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// 请求认证中间件
///
/// 状态机（所有失败均为 401，消息按失败类型区分）:
/// 1. 缺少令牌 → 拒绝
/// 2. 令牌已撤销 → 拒绝（先于签名校验，撤销与否与密码学有效性无关）
/// 3. 过期 / 签名错误 / 格式错误 → 拒绝
/// 4. 校验通过 → 将用户 id 注入请求扩展
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(req.headers()).ok_or(AppError::Unauthorized)?;

    if state.revocation.is_revoked(&token) {
        tracing::debug!("Rejected revoked token");
        return Err(AppError::Authentication(
            "Token has been revoked. Please login to get a new token".to_string(),
        ));
    }

    let claims = state.jwt_service.decode(&token)?;

    req.extensions_mut().insert(AuthContext { user_id: claims.sub });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer test_token_123".parse().unwrap());

        assert_eq!(extract_token(&headers), Some("test_token_123".to_string()));
    }

    #[test]
    fn test_extract_token_bare() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "test_token_123".parse().unwrap());

        assert_eq!(extract_token(&headers), Some("test_token_123".to_string()));
    }

    #[test]
    fn test_extract_token_missing() {
        let headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), None);
    }

    #[test]
    fn test_extract_token_empty_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer ".parse().unwrap());

        assert_eq!(extract_token(&headers), None);
    }
}
