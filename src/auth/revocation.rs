//! 令牌撤销登记表
//! 进程级共享的已撤销令牌集合，登出与密码重置后写入

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

/// 已撤销令牌集合
///
/// 令牌按原文登记，进程存活期间不做清理：令牌本身几分钟内过期,
/// 过期后 Verifier 会先行拒绝，集合里残留的条目只占内存。
/// 通过 AppState 注入，每个测试可以使用全新实例。
#[derive(Debug, Default)]
pub struct RevocationList {
    revoked: RwLock<HashSet<String>>,
}

impl RevocationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个已撤销令牌（按原文存储）
    pub fn revoke(&self, token: &str) {
        let mut revoked = self
            .revoked
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        revoked.insert(token.to_string());
    }

    /// 查询令牌是否已被撤销
    pub fn is_revoked(&self, token: &str) -> bool {
        self.revoked
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(token)
    }

    /// 已登记的令牌数量
    pub fn len(&self) -> usize {
        self.revoked
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_revoke_and_query() {
        let list = RevocationList::new();
        assert!(!list.is_revoked("token-a"));

        list.revoke("token-a");
        assert!(list.is_revoked("token-a"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_revoking_one_token_leaves_others() {
        let list = RevocationList::new();
        list.revoke("token-a");

        assert!(list.is_revoked("token-a"));
        assert!(!list.is_revoked("token-b"));
    }

    #[test]
    fn test_revoke_is_idempotent() {
        let list = RevocationList::new();
        list.revoke("token-a");
        list.revoke("token-a");

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_concurrent_revocations() {
        let list = Arc::new(RevocationList::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let list = list.clone();
                std::thread::spawn(move || {
                    for j in 0..100 {
                        list.revoke(&format!("token-{}-{}", i, j));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(list.len(), 800);
        assert!(list.is_revoked("token-3-42"));
    }
}
