use bson::oid::ObjectId;

use logistics_backend::dto::user_dto::PublicUser;
use logistics_backend::model::location::Location;
use logistics_backend::model::quote_request::{QuoteDimensions, QuoteRequest};
use logistics_backend::model::shipment::{Shipment, SHIPMENT_STATUSES};
use logistics_backend::model::tracking_event::TRACKING_STATUSES;
use logistics_backend::model::user::User;

fn sample_quote() -> QuoteRequest {
    QuoteRequest {
        id: Some(ObjectId::new()),
        user: ObjectId::new(),
        pickup_location: ObjectId::new(),
        drop_location: ObjectId::new(),
        goods_type: ObjectId::new(),
        container_type: ObjectId::new(),
        dimensions: QuoteDimensions {
            length: 2.5,
            width: 1.2,
            height: 1.8,
            weight: 800.0,
        },
        payment_term: "Prepaid".to_string(),
        status: "Pending".to_string(),
        final_quote_amount: None,
        additional_notes: Some("Fragile".to_string()),
        created_at: Some("2025-06-01T10:00:00+00:00".to_string()),
        updated_at: Some("2025-06-01T10:00:00+00:00".to_string()),
    }
}

#[test]
fn test_quote_request_uses_camel_case_keys() {
    let json = serde_json::to_value(sample_quote()).unwrap();
    assert!(json.get("pickupLocation").is_some());
    assert!(json.get("dropLocation").is_some());
    assert!(json.get("paymentTerm").is_some());
    assert!(json.get("finalQuoteAmount").is_some());
    assert!(json.get("pickup_location").is_none());
}

#[test]
fn test_location_serializes_type_field() {
    let location = Location {
        id: Some(ObjectId::new()),
        name: "Port of Algiers".to_string(),
        location_type: "pickup".to_string(),
        country: "Algeria".to_string(),
        city: "Algiers".to_string(),
        address: "Quai 9".to_string(),
        postal_code: "16000".to_string(),
        coordinates: vec![3.06, 36.76],
        status: "active".to_string(),
        created_at: None,
        updated_at: None,
    };
    let json = serde_json::to_value(location).unwrap();
    assert_eq!(json["type"], "pickup");
    assert_eq!(json["postalCode"], "16000");
    assert_eq!(json["coordinates"].as_array().unwrap().len(), 2);
}

#[test]
fn test_shipment_serializes_tracking_number() {
    let shipment = Shipment {
        id: Some(ObjectId::new()),
        user: ObjectId::new(),
        quote_request_id: ObjectId::new(),
        pickup_location: ObjectId::new(),
        drop_off_location: ObjectId::new(),
        status: "pending".to_string(),
        tracking_number: "TRK-20250601-0001".to_string(),
        shipment_date: "2025-06-01T10:00:00+00:00".to_string(),
        estimated_delivery_date: None,
        actual_delivery_date: None,
        goods_type: "Electronics".to_string(),
        container_type: "20ft Standard".to_string(),
        dimensions: None,
        payment_status: "pending".to_string(),
        shipment_notes: None,
        created_at: None,
        updated_at: None,
    };
    let json = serde_json::to_value(shipment).unwrap();
    assert_eq!(json["trackingNumber"], "TRK-20250601-0001");
    assert!(json.get("quoteRequestId").is_some());
    assert!(json.get("dropOffLocation").is_some());
}

#[test]
fn test_public_user_never_exposes_password_hash() {
    let user = User {
        id: Some(ObjectId::new()),
        name: "Amina Benali".to_string(),
        email: "amina@example.com".to_string(),
        password_hash: "$argon2id$secret".to_string(),
        phone: Some("+213770000000".to_string()),
        company_name: None,
        address: None,
        role: "customer".to_string(),
        created_at: None,
        updated_at: None,
    };
    let public = PublicUser::from(user);
    let json = serde_json::to_value(public).unwrap();
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "amina@example.com");
}

#[test]
fn test_lifecycle_status_enums() {
    assert_eq!(
        SHIPMENT_STATUSES,
        ["pending", "shipped", "in-transit", "delivered"]
    );
    assert!(TRACKING_STATUSES.contains(&"custom clearance"));
    assert!(TRACKING_STATUSES.contains(&"out for delivery"));
    assert_eq!(TRACKING_STATUSES.len(), 7);
}
