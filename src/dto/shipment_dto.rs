use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::shipment::ShipmentDimensions;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentRequest {
    #[validate(length(equal = 24))]
    pub quote_request_id: String,

    #[validate(length(equal = 24))]
    pub pickup_location: String,

    #[validate(length(equal = 24))]
    pub drop_off_location: String,

    #[validate(length(min = 4, max = 50))]
    pub tracking_number: String,

    #[validate(length(min = 1, max = 100))]
    pub goods_type: String,

    #[validate(length(min = 1, max = 100))]
    pub container_type: String,

    pub dimensions: Option<ShipmentDimensions>,

    pub estimated_delivery_date: Option<String>,

    #[validate(length(max = 1000))]
    pub shipment_notes: Option<String>,
}

/// Admin PUT body. Every field optional; lifecycle fields are free-form
/// updates bounded only by the status enums.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShipmentRequest {
    pub status: Option<String>,

    pub payment_status: Option<String>,

    #[validate(length(min = 4, max = 50))]
    pub tracking_number: Option<String>,

    pub shipment_date: Option<String>,
    pub estimated_delivery_date: Option<String>,
    pub actual_delivery_date: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub goods_type: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub container_type: Option<String>,

    pub dimensions: Option<ShipmentDimensions>,

    #[validate(length(max = 1000))]
    pub shipment_notes: Option<String>,
}
