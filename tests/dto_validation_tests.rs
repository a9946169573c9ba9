use validator::Validate;

use logistics_backend::dto::shipment_dto::{CreateShipmentRequest, UpdateShipmentRequest};
use logistics_backend::dto::tracking_dto::CreateTrackingEventRequest;

fn sample_shipment_request() -> CreateShipmentRequest {
    CreateShipmentRequest {
        quote_request_id: "665f1f77bcf86cd799439011".to_string(),
        pickup_location: "665f1f77bcf86cd799439012".to_string(),
        drop_off_location: "665f1f77bcf86cd799439013".to_string(),
        tracking_number: "TRK-20250601-0001".to_string(),
        goods_type: "Electronics".to_string(),
        container_type: "20ft Standard".to_string(),
        dimensions: None,
        estimated_delivery_date: Some("2025-07-01T00:00:00+00:00".to_string()),
        shipment_notes: None,
    }
}

#[test]
fn test_create_shipment_request_valid() {
    assert!(sample_shipment_request().validate().is_ok());
}

#[test]
fn test_create_shipment_rejects_short_tracking_number() {
    let mut request = sample_shipment_request();
    request.tracking_number = "TRK".to_string();
    assert!(request.validate().is_err());
}

#[test]
fn test_create_shipment_rejects_malformed_quote_id() {
    let mut request = sample_shipment_request();
    request.quote_request_id = "not-an-object-id".to_string();
    assert!(request.validate().is_err());
}

#[test]
fn test_update_shipment_request_all_fields_optional() {
    let request = UpdateShipmentRequest {
        status: None,
        payment_status: None,
        tracking_number: None,
        shipment_date: None,
        estimated_delivery_date: None,
        actual_delivery_date: None,
        goods_type: None,
        container_type: None,
        dimensions: None,
        shipment_notes: None,
    };
    assert!(request.validate().is_ok());
}

#[test]
fn test_create_tracking_event_request_valid() {
    let request = CreateTrackingEventRequest {
        shipment: "665f1f77bcf86cd799439011".to_string(),
        event: "Arrived at port".to_string(),
        location: "Marseille".to_string(),
        status: "in transit".to_string(),
        event_time: "2025-06-10T08:30:00+00:00".to_string(),
        remarks: None,
    };
    assert!(request.validate().is_ok());
}

#[test]
fn test_create_tracking_event_requires_fields() {
    let request = CreateTrackingEventRequest {
        shipment: "665f1f77bcf86cd799439011".to_string(),
        event: "".to_string(),
        location: "Marseille".to_string(),
        status: "in transit".to_string(),
        event_time: "2025-06-10T08:30:00+00:00".to_string(),
        remarks: None,
    };
    assert!(request.validate().is_err());
}
