use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrackingEventRequest {
    #[validate(length(equal = 24))]
    pub shipment: String,

    #[validate(length(min = 1, max = 200))]
    pub event: String,

    #[validate(length(min = 1, max = 200))]
    pub location: String,

    /// One of the tracking status checkpoints (checked in the service)
    #[validate(length(min = 1, max = 50))]
    pub status: String,

    #[validate(length(min = 1, max = 50))]
    pub event_time: String,

    #[validate(length(max = 500))]
    pub remarks: Option<String>,
}
