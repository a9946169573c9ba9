use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use tracing::{error, info, instrument};

use crate::dto::shipment_dto::{CreateShipmentRequest, UpdateShipmentRequest};
use crate::model::shipment::{Shipment, PAYMENT_STATUSES, SHIPMENT_STATUSES};
use crate::model::user::ROLE_ADMIN;
use crate::repository::quote_repo::{MongoQuoteRepository, QuoteRepository};
use crate::repository::shipment_repo::{MongoShipmentRepository, ShipmentRepository};
use crate::util::error::ServiceError;

#[async_trait]
pub trait ShipmentService: Send + Sync {
    /// Admin creates a shipment from an existing quote; the shipment is owned
    /// by the quote's customer.
    async fn create_shipment(&self, request: CreateShipmentRequest)
        -> Result<Shipment, ServiceError>;
    /// Admins see every shipment, customers only their own.
    async fn list_shipments(
        &self,
        user: ObjectId,
        role: &str,
    ) -> Result<Vec<Shipment>, ServiceError>;
    async fn get_by_tracking_number(
        &self,
        user: ObjectId,
        role: &str,
        tracking_number: &str,
    ) -> Result<Shipment, ServiceError>;
    async fn update_shipment(
        &self,
        id: ObjectId,
        update: UpdateShipmentRequest,
    ) -> Result<Shipment, ServiceError>;
    async fn delete_shipment(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct ShipmentServiceImpl {
    pub shipment_repo: MongoShipmentRepository,
    pub quote_repo: MongoQuoteRepository,
}

fn parse_object_id(value: &str, field: &str) -> Result<ObjectId, ServiceError> {
    ObjectId::parse_str(value)
        .map_err(|_| ServiceError::InvalidInput(format!("Invalid {} id", field)))
}

#[async_trait]
impl ShipmentService for ShipmentServiceImpl {
    #[instrument(skip(self, request), fields(tracking_number = %request.tracking_number))]
    async fn create_shipment(
        &self,
        request: CreateShipmentRequest,
    ) -> Result<Shipment, ServiceError> {
        info!("Creating shipment from quote");

        let quote_id = parse_object_id(&request.quote_request_id, "quote request")?;
        let quote = self
            .quote_repo
            .get_by_id(quote_id)
            .await
            .map_err(|_| ServiceError::NotFound("Quote not found.".to_string()))?;

        if self
            .shipment_repo
            .find_by_tracking_number(&request.tracking_number)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(
                "Tracking number already in use.".to_string(),
            ));
        }

        let shipment = Shipment {
            id: None,
            // The quote's customer owns the shipment
            user: quote.user,
            quote_request_id: quote_id,
            pickup_location: parse_object_id(&request.pickup_location, "pickup location")?,
            drop_off_location: parse_object_id(&request.drop_off_location, "drop-off location")?,
            status: "pending".to_string(),
            tracking_number: request.tracking_number,
            shipment_date: chrono::Utc::now().to_rfc3339(),
            estimated_delivery_date: request.estimated_delivery_date,
            actual_delivery_date: None,
            goods_type: request.goods_type,
            container_type: request.container_type,
            dimensions: request.dimensions,
            payment_status: "pending".to_string(),
            shipment_notes: request.shipment_notes,
            created_at: None,
            updated_at: None,
        };

        let res = self.shipment_repo.create(shipment).await;
        match &res {
            Ok(_) => info!("Shipment created"),
            Err(e) => error!("Failed to create shipment: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(user = %user, role = %role))]
    async fn list_shipments(
        &self,
        user: ObjectId,
        role: &str,
    ) -> Result<Vec<Shipment>, ServiceError> {
        let shipments = if role == ROLE_ADMIN {
            self.shipment_repo.list_all().await
        } else {
            self.shipment_repo.list_by_user(user).await
        };
        shipments.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(tracking_number = %tracking_number))]
    async fn get_by_tracking_number(
        &self,
        user: ObjectId,
        role: &str,
        tracking_number: &str,
    ) -> Result<Shipment, ServiceError> {
        let shipment = self
            .shipment_repo
            .find_by_tracking_number(tracking_number)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Shipment not found".to_string()))?;

        if role != ROLE_ADMIN && shipment.user != user {
            return Err(ServiceError::Forbidden(
                "Access denied: Not your shipment.".to_string(),
            ));
        }
        Ok(shipment)
    }

    #[instrument(skip(self, update), fields(id = %id))]
    async fn update_shipment(
        &self,
        id: ObjectId,
        update: UpdateShipmentRequest,
    ) -> Result<Shipment, ServiceError> {
        let mut fields = doc! {};
        if let Some(status) = update.status {
            if !SHIPMENT_STATUSES.contains(&status.as_str()) {
                return Err(ServiceError::InvalidInput(format!(
                    "Invalid status: {}",
                    status
                )));
            }
            fields.insert("status", status);
        }
        if let Some(payment_status) = update.payment_status {
            if !PAYMENT_STATUSES.contains(&payment_status.as_str()) {
                return Err(ServiceError::InvalidInput(format!(
                    "Invalid payment status: {}",
                    payment_status
                )));
            }
            fields.insert("paymentStatus", payment_status);
        }
        if let Some(tracking_number) = update.tracking_number {
            // Renumbering must not collide with another shipment
            if let Some(existing) = self
                .shipment_repo
                .find_by_tracking_number(&tracking_number)
                .await?
            {
                if existing.id != Some(id) {
                    return Err(ServiceError::Conflict(
                        "Tracking number already in use.".to_string(),
                    ));
                }
            }
            fields.insert("trackingNumber", tracking_number);
        }
        if let Some(shipment_date) = update.shipment_date {
            fields.insert("shipmentDate", shipment_date);
        }
        if let Some(estimated) = update.estimated_delivery_date {
            fields.insert("estimatedDeliveryDate", estimated);
        }
        if let Some(actual) = update.actual_delivery_date {
            fields.insert("actualDeliveryDate", actual);
        }
        if let Some(goods_type) = update.goods_type {
            fields.insert("goodsType", goods_type);
        }
        if let Some(container_type) = update.container_type {
            fields.insert("containerType", container_type);
        }
        if let Some(dimensions) = update.dimensions {
            let value = bson::to_bson(&dimensions)
                .map_err(|e| ServiceError::InternalError(format!("BSON error: {}", e)))?;
            fields.insert("dimensions", value);
        }
        if let Some(notes) = update.shipment_notes {
            fields.insert("shipmentNotes", notes);
        }

        if fields.is_empty() {
            return self
                .shipment_repo
                .get_by_id(id)
                .await
                .map_err(ServiceError::from);
        }
        self.shipment_repo
            .update_fields(id, fields)
            .await
            .map_err(ServiceError::from)
    }

    async fn delete_shipment(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.shipment_repo
            .delete(id)
            .await
            .map_err(ServiceError::from)
    }
}
