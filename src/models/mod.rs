//! 数据模型模块
//! 数据库行类型与请求/响应 DTO

pub mod auth;
pub mod bucketlist;
pub mod item;
pub mod user;

use crate::error::AppError;

/// 拒绝空白字段（空字符串或纯空白）
/// validator 的 length 规则不会拦住纯空白输入，这里补上
pub fn validate_not_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("Enter valid input: {}", field)));
    }
    Ok(())
}
