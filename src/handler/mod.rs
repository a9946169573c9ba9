pub mod user_handler;
pub mod location_handler;
pub mod container_handler;
pub mod goods_handler;
pub mod quote_handler;
pub mod shipment_handler;
pub mod tracking_handler;
pub mod contact_handler;
pub mod offering_handler;
