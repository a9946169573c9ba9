use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const MESSAGE_STATUSES: [&str; 3] = ["pending", "reviewed", "resolved"];

/// Customer inquiry from the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub status: String, // "pending" | "reviewed" | "resolved"
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
