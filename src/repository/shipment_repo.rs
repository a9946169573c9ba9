use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use tracing::{error, info};

use crate::model::shipment::Shipment;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    async fn create(&self, shipment: Shipment) -> RepositoryResult<Shipment>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Shipment>;
    async fn find_by_tracking_number(&self, tracking_number: &str)
        -> RepositoryResult<Option<Shipment>>;
    /// All shipments, most recent shipmentDate first.
    async fn list_all(&self) -> RepositoryResult<Vec<Shipment>>;
    /// Shipments owned by one customer, most recent shipmentDate first.
    async fn list_by_user(&self, user: ObjectId) -> RepositoryResult<Vec<Shipment>>;
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<Shipment>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
}

pub struct MongoShipmentRepository {
    collection: mongodb::Collection<Shipment>,
}

impl MongoShipmentRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoShipmentRepository {
            collection: db.collection::<Shipment>("shipments"),
        }
    }

    async fn collect(
        &self,
        filter: Option<Document>,
    ) -> RepositoryResult<Vec<Shipment>> {
        let options = FindOptions::builder()
            .sort(doc! { "shipmentDate": -1 })
            .build();
        let mut cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list shipments: {}", e)))?;
        let mut shipments = Vec::new();
        while let Some(item) = cursor.next().await {
            shipments.push(item.map_err(|e| {
                RepositoryError::serialization(format!("Failed to deserialize shipment: {}", e))
            })?);
        }
        Ok(shipments)
    }
}

#[async_trait]
impl ShipmentRepository for MongoShipmentRepository {
    #[tracing::instrument(skip(self, shipment), fields(tracking_number = %shipment.tracking_number))]
    async fn create(&self, shipment: Shipment) -> RepositoryResult<Shipment> {
        info!("Creating new shipment");
        let mut new_shipment = shipment;
        new_shipment.id = Some(ObjectId::new());
        let now = super::now_rfc3339();
        new_shipment.created_at = Some(now.clone());
        new_shipment.updated_at = Some(now);

        match self.collection.insert_one(new_shipment.clone(), None).await {
            Ok(_) => {
                info!("Shipment created successfully");
                Ok(new_shipment)
            }
            Err(e) => {
                error!("Failed to create shipment: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Shipment> {
        match self.collection.find_one(doc! { "_id": id }, None).await {
            Ok(Some(shipment)) => Ok(shipment),
            Ok(None) => Err(RepositoryError::not_found(format!(
                "Shipment not found for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to fetch shipment: {}",
                e
            ))),
        }
    }

    async fn find_by_tracking_number(
        &self,
        tracking_number: &str,
    ) -> RepositoryResult<Option<Shipment>> {
        let shipment = self
            .collection
            .find_one(doc! { "trackingNumber": tracking_number }, None)
            .await
            .map_err(|e| {
                RepositoryError::database(format!(
                    "Failed to find shipment by tracking number: {}",
                    e
                ))
            })?;
        Ok(shipment)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Shipment>> {
        self.collect(None).await
    }

    async fn list_by_user(&self, user: ObjectId) -> RepositoryResult<Vec<Shipment>> {
        self.collect(Some(doc! { "user": user })).await
    }

    #[tracing::instrument(skip(self, fields), fields(id = %id))]
    async fn update_fields(&self, id: ObjectId, mut fields: Document) -> RepositoryResult<Shipment> {
        fields.insert("updatedAt", super::now_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to update shipment: {}", e)))?;
        if result.matched_count == 0 {
            error!("No shipment found to update for ID: {}", id);
            return Err(RepositoryError::not_found(format!(
                "No shipment found for ID: {}",
                id
            )));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete shipment: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No shipment found for ID: {}",
                id
            )));
        }
        Ok(())
    }
}
