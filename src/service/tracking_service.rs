use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument};

use crate::dto::tracking_dto::CreateTrackingEventRequest;
use crate::model::tracking_event::{TrackingEvent, TRACKING_STATUSES};
use crate::model::user::ROLE_ADMIN;
use crate::repository::shipment_repo::{MongoShipmentRepository, ShipmentRepository};
use crate::repository::tracking_event_repo::{
    MongoTrackingEventRepository, TrackingEventRepository,
};
use crate::util::error::ServiceError;

#[async_trait]
pub trait TrackingService: Send + Sync {
    /// Admin records a checkpoint against a shipment.
    async fn record_event(
        &self,
        recorded_by: ObjectId,
        request: CreateTrackingEventRequest,
    ) -> Result<TrackingEvent, ServiceError>;
    /// Tracking history, oldest first. Customers only see their own shipments.
    async fn history_for_shipment(
        &self,
        user: ObjectId,
        role: &str,
        shipment_id: ObjectId,
    ) -> Result<Vec<TrackingEvent>, ServiceError>;
    async fn delete_event(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct TrackingServiceImpl {
    pub tracking_repo: MongoTrackingEventRepository,
    pub shipment_repo: MongoShipmentRepository,
}

#[async_trait]
impl TrackingService for TrackingServiceImpl {
    #[instrument(skip(self, request), fields(shipment = %request.shipment, status = %request.status))]
    async fn record_event(
        &self,
        recorded_by: ObjectId,
        request: CreateTrackingEventRequest,
    ) -> Result<TrackingEvent, ServiceError> {
        info!("Recording tracking event");
        if !TRACKING_STATUSES.contains(&request.status.as_str()) {
            return Err(ServiceError::InvalidInput(format!(
                "Invalid status: {}",
                request.status
            )));
        }

        let shipment = ObjectId::parse_str(&request.shipment)
            .map_err(|_| ServiceError::InvalidInput("Invalid shipment id".to_string()))?;

        let event = TrackingEvent {
            id: None,
            user: recorded_by,
            shipment,
            event: request.event,
            location: request.location,
            status: request.status,
            event_time: request.event_time,
            remarks: request.remarks,
            created_at: None,
            updated_at: None,
        };
        self.tracking_repo
            .create(event)
            .await
            .map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(shipment_id = %shipment_id))]
    async fn history_for_shipment(
        &self,
        user: ObjectId,
        role: &str,
        shipment_id: ObjectId,
    ) -> Result<Vec<TrackingEvent>, ServiceError> {
        let shipment = self
            .shipment_repo
            .get_by_id(shipment_id)
            .await
            .map_err(|_| ServiceError::NotFound("Shipment not found".to_string()))?;

        if role != ROLE_ADMIN && shipment.user != user {
            return Err(ServiceError::Forbidden(
                "Access denied: You can only track your own shipments.".to_string(),
            ));
        }

        self.tracking_repo
            .list_by_shipment(shipment_id)
            .await
            .map_err(ServiceError::from)
    }

    async fn delete_event(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.tracking_repo
            .delete(id)
            .await
            .map_err(ServiceError::from)
    }
}
