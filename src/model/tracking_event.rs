use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const TRACKING_STATUSES: [&str; 7] = [
    "pending",
    "picked up",
    "in transit",
    "custom clearance",
    "arrived at destination",
    "out for delivery",
    "delivered",
];

/// Discrete status checkpoint in a shipment's journey.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    /// Admin who recorded the event
    pub user: ObjectId,
    pub shipment: ObjectId,
    pub event: String,
    pub location: String,
    pub status: String,
    pub event_time: String,
    pub remarks: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
