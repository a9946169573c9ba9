use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuoteDimensionsDto {
    #[validate(range(min = 0.0))]
    pub length: f64,
    #[validate(range(min = 0.0))]
    pub width: f64,
    #[validate(range(min = 0.0))]
    pub height: f64,
    #[validate(range(min = 0.0))]
    pub weight: f64,
}

/// Quote submission. Reference fields are ObjectId hex strings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    #[validate(length(equal = 24))]
    pub pickup_location: String,

    #[validate(length(equal = 24))]
    pub drop_location: String,

    #[validate(length(equal = 24))]
    pub goods_type: String,

    #[validate(length(equal = 24))]
    pub container_type: String,

    #[validate(nested)]
    pub dimensions: QuoteDimensionsDto,

    /// "Prepaid" | "Postpaid" | "Third Party" (checked in the service)
    #[validate(length(min = 1, max = 20))]
    pub payment_term: String,

    #[validate(length(max = 1000))]
    pub additional_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuoteStatusRequest {
    /// "Pending" | "Quoted" | "Rejected"
    #[validate(length(min = 1, max = 20))]
    pub status: String,

    #[validate(range(min = 0.0))]
    pub final_quote_amount: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_ids_must_be_objectid_hex_length() {
        let req = CreateQuoteRequest {
            pickup_location: "abc".to_string(),
            drop_location: "665f1f77bcf86cd799439011".to_string(),
            goods_type: "665f1f77bcf86cd799439012".to_string(),
            container_type: "665f1f77bcf86cd799439013".to_string(),
            dimensions: QuoteDimensionsDto {
                length: 2.0,
                width: 2.0,
                height: 2.0,
                weight: 500.0,
            },
            payment_term: "Prepaid".to_string(),
            additional_notes: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let dims = QuoteDimensionsDto {
            length: -1.0,
            width: 2.0,
            height: 2.0,
            weight: 500.0,
        };
        assert!(dims.validate().is_err());
    }
}
