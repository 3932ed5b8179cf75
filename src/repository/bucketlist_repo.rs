//! Bucketlist repository (数据库访问层)
//! 所有查询均以 user_id 限定范围，越权访问表现为 NotFound

use crate::{error::AppError, models::bucketlist::Bucketlist};
use sqlx::{PgPool, Row};

use super::is_unique_violation;

pub struct BucketlistRepository {
    db: PgPool,
}

impl BucketlistRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 创建 bucketlist；同一用户下名称唯一
    pub async fn create(&self, user_id: i64, name: &str) -> Result<Bucketlist, AppError> {
        let result = sqlx::query_as::<_, Bucketlist>(
            r#"
            INSERT INTO bucketlists (name, user_id)
            VALUES ($1, $2)
            RETURNING *
            "#
        )
        .bind(name)
        .bind(user_id)
        .fetch_one(&self.db)
        .await;

        match result {
            Ok(bucketlist) => Ok(bucketlist),
            Err(err) if is_unique_violation(&err) => {
                Err(AppError::Duplicate("bucketlist name already taken".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// 在用户范围内按 ID 查找
    pub async fn find_for_user(&self, id: i64, user_id: i64) -> Result<Option<Bucketlist>, AppError> {
        let bucketlist = sqlx::query_as::<_, Bucketlist>(
            "SELECT * FROM bucketlists WHERE id = $1 AND user_id = $2"
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(bucketlist)
    }

    /// 分页列出用户的 bucketlists，可按名称子串搜索（不区分大小写）
    pub async fn list(
        &self,
        user_id: i64,
        q: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Bucketlist>, AppError> {
        let bucketlists = sqlx::query_as::<_, Bucketlist>(
            r#"
            SELECT * FROM bucketlists
            WHERE user_id = $1
              AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
            ORDER BY id
            LIMIT $3 OFFSET $4
            "#
        )
        .bind(user_id)
        .bind(q)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(bucketlists)
    }

    /// 统计用户的 bucketlist 数量（应用与 list 相同的搜索条件）
    pub async fn count(&self, user_id: i64, q: Option<&str>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query(
            r#"
            SELECT COUNT(*) FROM bucketlists
            WHERE user_id = $1
              AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
            "#
        )
        .bind(user_id)
        .bind(q)
        .fetch_one(&self.db)
        .await?
        .get(0);

        Ok(count)
    }

    /// 更新名称
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        name: &str,
    ) -> Result<Option<Bucketlist>, AppError> {
        let result = sqlx::query_as::<_, Bucketlist>(
            r#"
            UPDATE bucketlists
            SET name = $3, date_modified = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#
        )
        .bind(id)
        .bind(user_id)
        .bind(name)
        .fetch_optional(&self.db)
        .await;

        match result {
            Ok(bucketlist) => Ok(bucketlist),
            Err(err) if is_unique_violation(&err) => {
                Err(AppError::Duplicate("bucketlist name already taken".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// 删除 bucketlist（连带删除其 items，由外键级联保证）
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM bucketlists WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
