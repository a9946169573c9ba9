use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDimensionsDto {
    #[validate(range(min = 0.1))]
    pub inside_length: f64,
    #[validate(range(min = 0.1))]
    pub inside_width: f64,
    #[validate(range(min = 0.1))]
    pub inside_height: f64,
    #[validate(range(min = 0.1))]
    pub door_width: f64,
    #[validate(range(min = 0.1))]
    pub door_height: f64,
    #[validate(range(min = 0.1))]
    pub cbm_capacity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContainerTypeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 500))]
    pub description: String,

    #[validate(nested)]
    pub dimensions: ContainerDimensionsDto,

    #[validate(range(min = 1.0))]
    pub tare_weight: f64,

    #[validate(range(min = 1.0))]
    pub max_cargo_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContainerTypeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 500))]
    pub description: Option<String>,

    #[validate(nested)]
    pub dimensions: Option<ContainerDimensionsDto>,

    #[validate(range(min = 1.0))]
    pub tare_weight: Option<f64>,

    #[validate(range(min = 1.0))]
    pub max_cargo_weight: Option<f64>,

    pub status: Option<String>,
}
