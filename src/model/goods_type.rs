use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Goods category referenced from quote forms. `name` is unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsType {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub status: String, // "active" | "inactive"
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
