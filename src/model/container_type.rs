use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Inside/door measurements in metres, capacity in cubic metres.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDimensions {
    pub inside_length: f64,
    pub inside_width: f64,
    pub inside_height: f64,
    pub door_width: f64,
    pub door_height: f64,
    pub cbm_capacity: f64,
}

/// Freight container catalog entry. `name` is unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerType {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub dimensions: ContainerDimensions,
    /// Empty container weight, kg
    pub tare_weight: f64,
    /// Maximum cargo weight, kg
    pub max_cargo_weight: f64,
    pub status: String, // "active" | "inactive"
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
