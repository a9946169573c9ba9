pub mod user_router;
pub mod location_router;
pub mod container_router;
pub mod goods_router;
pub mod quote_router;
pub mod shipment_router;
pub mod tracking_router;
pub mod contact_router;
pub mod offering_router;
