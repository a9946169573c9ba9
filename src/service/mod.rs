pub mod user_service;
pub mod location_service;
pub mod container_service;
pub mod goods_service;
pub mod quote_service;
pub mod shipment_service;
pub mod tracking_service;
pub mod contact_service;
pub mod offering_service;
