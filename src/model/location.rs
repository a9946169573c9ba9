use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const LOCATION_TYPES: [&str; 2] = ["pickup", "drop-off"];

/// Pickup hub or drop-off destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(rename = "type")]
    pub location_type: String, // "pickup" | "drop-off"
    pub country: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,
    /// [longitude, latitude]
    pub coordinates: Vec<f64>,
    pub status: String, // "active" | "inactive"
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
