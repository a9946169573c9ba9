use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Freight-forwarding service shown on the marketing site. `name` is unique.
/// Stored in the `services` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub status: String, // "active" | "inactive"
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
