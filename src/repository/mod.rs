//! 数据访问层
//! 每个聚合一个 repository，负责 SQL 与错误翻译

pub mod bucketlist_repo;
pub mod item_repo;
pub mod user_repo;

pub use bucketlist_repo::BucketlistRepository;
pub use item_repo::ItemRepository;
pub use user_repo::UserRepository;

/// 判断是否为数据库唯一约束冲突（SQLSTATE 23505）
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}
