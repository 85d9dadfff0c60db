use crate::models::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of POST /api/users. Fields stay optional so the handler can check
/// presence itself and answer with the canned 400 message.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub message: String,
}

impl CreatedUser {
    pub fn new(user: User, message: &str) -> Self {
        let record = UserRecord::from(user);
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            created_at: record.created_at,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserList {
    pub users: Vec<UserRecord>,
    pub total: u64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_timestamps_are_rfc3339() {
        let user = User::synthesize("Test User".to_string(), "test@example.com".to_string());
        let record = UserRecord::from(user.clone());
        assert_eq!(record.id, user.id);
        assert_eq!(record.created_at, user.created_at.to_rfc3339());
    }
}
