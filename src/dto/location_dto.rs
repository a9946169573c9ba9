use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// "pickup" | "drop-off" (checked against the enum in the service)
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 20))]
    pub location_type: String,

    #[validate(length(min = 1, max = 100))]
    pub country: String,

    #[validate(length(min = 1, max = 100))]
    pub city: String,

    #[validate(length(min = 1, max = 200))]
    pub address: String,

    #[validate(length(min = 1, max = 20))]
    pub postal_code: String,

    /// [longitude, latitude]
    #[validate(length(min = 2, max = 2))]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub location_type: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub country: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub address: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub postal_code: Option<String>,

    #[validate(length(min = 2, max = 2))]
    pub coordinates: Option<Vec<f64>>,

    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_must_be_a_pair() {
        let req = CreateLocationRequest {
            name: "Port of Algiers".to_string(),
            location_type: "pickup".to_string(),
            country: "Algeria".to_string(),
            city: "Algiers".to_string(),
            address: "Quai 9".to_string(),
            postal_code: "16000".to_string(),
            coordinates: vec![3.06],
        };
        assert!(req.validate().is_err());
    }
}
