//! Bucketlist item domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Item row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub bucketlist_id: i64,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
}

/// Create item request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// Update item request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateItemRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_name_validation() {
        let empty = CreateItemRequest { name: "".to_string() };
        assert!(empty.validate().is_err());

        let valid = CreateItemRequest { name: "buy a tesla".to_string() };
        assert!(valid.validate().is_ok());
    }
}
