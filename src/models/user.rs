use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds a record from the request body and the wall clock. The id is
    /// the current Unix time in milliseconds; nothing is persisted.
    pub fn synthesize(name: String, email: String) -> User {
        let now = Utc::now();
        User {
            id: now.timestamp_millis(),
            name,
            email,
            created_at: now,
        }
    }
}
