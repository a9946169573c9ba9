pub mod user;

/// Activation states shared by the catalog collections.
pub const ACTIVE_STATUSES: [&str; 2] = ["active", "inactive"];

pub mod location;
pub mod container_type;
pub mod goods_type;
pub mod quote_request;
pub mod shipment;
pub mod tracking_event;
pub mod contact_message;
pub mod service_offering;
