//! Bucketlist domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Bucketlist row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Bucketlist {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
}

/// Create bucketlist request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBucketlistRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// Update bucketlist request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBucketlistRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// 列表查询参数：页码、每页条数与按名称搜索
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub q: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    5
}

const MAX_LIMIT: i64 = 100;

impl PageQuery {
    /// 归一化为 (limit, offset)，页码从 1 开始
    pub fn bounds(&self) -> (i64, i64) {
        let limit = self.limit.clamp(1, MAX_LIMIT);
        let page = self.page.max(1);
        (limit, (page - 1) * limit)
    }

    /// 归一化后的页码
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_bounds() {
        let query = PageQuery { page: 1, limit: 5, q: None };
        assert_eq!(query.bounds(), (5, 0));

        let query = PageQuery { page: 3, limit: 10, q: None };
        assert_eq!(query.bounds(), (10, 20));

        // 非法值被归一化
        let query = PageQuery { page: 0, limit: 0, q: None };
        assert_eq!(query.bounds(), (1, 0));

        let query = PageQuery { page: 2, limit: 1000, q: None };
        assert_eq!(query.bounds(), (100, 100));
    }

    #[test]
    fn test_name_validation() {
        let empty = CreateBucketlistRequest { name: "".to_string() };
        assert!(empty.validate().is_err());

        let valid = CreateBucketlistRequest { name: "Career".to_string() };
        assert!(valid.validate().is_ok());
    }
}
