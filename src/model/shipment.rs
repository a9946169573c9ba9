use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const SHIPMENT_STATUSES: [&str; 4] = ["pending", "shipped", "in-transit", "delivered"];
pub const PAYMENT_STATUSES: [&str; 3] = ["paid", "unpaid", "pending"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentDimensions {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

/// Physical movement of goods tied to an approved quote. `trackingNumber`
/// is unique; goods/container names are denormalized at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub user: ObjectId,
    pub quote_request_id: ObjectId,
    pub pickup_location: ObjectId,
    pub drop_off_location: ObjectId,
    pub status: String, // "pending" | "shipped" | "in-transit" | "delivered"
    pub tracking_number: String,
    pub shipment_date: String,
    pub estimated_delivery_date: Option<String>,
    pub actual_delivery_date: Option<String>,
    pub goods_type: String,
    pub container_type: String,
    pub dimensions: Option<ShipmentDimensions>,
    pub payment_status: String, // "paid" | "unpaid" | "pending"
    pub shipment_notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
