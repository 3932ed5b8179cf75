//! Item repository (数据库访问层)
//! 所有查询均以 bucketlist_id 限定范围；bucketlist 归属校验在 handler 层完成

use crate::{error::AppError, models::item::Item};
use sqlx::{PgPool, Row};

use super::is_unique_violation;

pub struct ItemRepository {
    db: PgPool,
}

impl ItemRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 创建 item；同一 bucketlist 下名称唯一
    pub async fn create(&self, bucketlist_id: i64, name: &str) -> Result<Item, AppError> {
        let result = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, bucketlist_id)
            VALUES ($1, $2)
            RETURNING *
            "#
        )
        .bind(name)
        .bind(bucketlist_id)
        .fetch_one(&self.db)
        .await;

        match result {
            Ok(item) => Ok(item),
            Err(err) if is_unique_violation(&err) => {
                Err(AppError::Duplicate("item name already taken".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// 在 bucketlist 范围内按 ID 查找
    pub async fn find_in_bucketlist(
        &self,
        id: i64,
        bucketlist_id: i64,
    ) -> Result<Option<Item>, AppError> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT * FROM items WHERE id = $1 AND bucketlist_id = $2"
        )
        .bind(id)
        .bind(bucketlist_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(item)
    }

    /// 分页列出 bucketlist 的 items，可按名称子串搜索（不区分大小写）
    pub async fn list(
        &self,
        bucketlist_id: i64,
        q: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Item>, AppError> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT * FROM items
            WHERE bucketlist_id = $1
              AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
            ORDER BY id
            LIMIT $3 OFFSET $4
            "#
        )
        .bind(bucketlist_id)
        .bind(q)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(items)
    }

    /// 统计 bucketlist 的 item 数量（应用与 list 相同的搜索条件）
    pub async fn count(&self, bucketlist_id: i64, q: Option<&str>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query(
            r#"
            SELECT COUNT(*) FROM items
            WHERE bucketlist_id = $1
              AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
            "#
        )
        .bind(bucketlist_id)
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
        bucketlist_id: i64,
        name: &str,
    ) -> Result<Option<Item>, AppError> {
        let result = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = $3, date_modified = NOW()
            WHERE id = $1 AND bucketlist_id = $2
            RETURNING *
            "#
        )
        .bind(id)
        .bind(bucketlist_id)
        .bind(name)
        .fetch_optional(&self.db)
        .await;

        match result {
            Ok(item) => Ok(item),
            Err(err) if is_unique_violation(&err) => {
                Err(AppError::Duplicate("item name already taken".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// 删除 item
    pub async fn delete(&self, id: i64, bucketlist_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1 AND bucketlist_id = $2")
            .bind(id)
            .bind(bucketlist_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
