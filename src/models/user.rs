//! User domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User account row.
/// Deliberately not Serialize: the password hash must never leave the server.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 256))]
    pub password: String,
}

/// User response (without sensitive data)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "pw".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_password = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "".to_string(),
        };
        assert!(empty_password.validate().is_err());

        let blank_email = RegisterRequest {
            email: "   ".to_string(),
            password: "pw".to_string(),
        };
        assert!(blank_email.validate().is_err());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "pw".to_string(),
        };
        assert!(bad_email.validate().is_err());
    }
}
