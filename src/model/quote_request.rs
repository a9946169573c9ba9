use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

pub const PAYMENT_TERMS: [&str; 3] = ["Prepaid", "Postpaid", "Third Party"];
pub const QUOTE_STATUSES: [&str; 3] = ["Pending", "Quoted", "Rejected"];

/// Cargo measurements supplied by the customer. Metres and kilograms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
}

/// Customer-submitted shipping inquiry awaiting admin pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub user: ObjectId,
    pub pickup_location: ObjectId,
    pub drop_location: ObjectId,
    pub goods_type: ObjectId,
    pub container_type: ObjectId,
    pub dimensions: QuoteDimensions,
    pub payment_term: String, // "Prepaid" | "Postpaid" | "Third Party"
    pub status: String,       // "Pending" | "Quoted" | "Rejected"
    pub final_quote_amount: Option<f64>,
    pub additional_notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
