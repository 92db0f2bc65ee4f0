use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-side notification (e.g. low-stock alerts raised on product
/// updates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}
