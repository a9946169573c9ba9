use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;

use crate::model::tracking_event::TrackingEvent;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait TrackingEventRepository: Send + Sync {
    async fn create(&self, event: TrackingEvent) -> RepositoryResult<TrackingEvent>;
    /// History for one shipment, oldest checkpoint first.
    async fn list_by_shipment(&self, shipment: ObjectId) -> RepositoryResult<Vec<TrackingEvent>>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
}

pub struct MongoTrackingEventRepository {
    collection: mongodb::Collection<TrackingEvent>,
}

impl MongoTrackingEventRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoTrackingEventRepository {
            collection: db.collection::<TrackingEvent>("trackingevents"),
        }
    }
}

#[async_trait]
impl TrackingEventRepository for MongoTrackingEventRepository {
    async fn create(&self, event: TrackingEvent) -> RepositoryResult<TrackingEvent> {
        let mut new_event = event;
        new_event.id = Some(ObjectId::new());
        let now = super::now_rfc3339();
        new_event.created_at = Some(now.clone());
        new_event.updated_at = Some(now);
        self.collection
            .insert_one(new_event.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(new_event)
    }

    async fn list_by_shipment(&self, shipment: ObjectId) -> RepositoryResult<Vec<TrackingEvent>> {
        let options = FindOptions::builder().sort(doc! { "eventTime": 1 }).build();
        let mut cursor = self
            .collection
            .find(doc! { "shipment": shipment }, options)
            .await
            .map_err(|e| {
                RepositoryError::database(format!("Failed to list tracking events: {}", e))
            })?;
        let mut events = Vec::new();
        while let Some(item) = cursor.next().await {
            events.push(item.map_err(|e| {
                RepositoryError::serialization(format!(
                    "Failed to deserialize tracking event: {}",
                    e
                ))
            })?);
        }
        Ok(events)
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                RepositoryError::database(format!("Failed to delete tracking event: {}", e))
            })?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No tracking event found for ID: {}",
                id
            )));
        }
        Ok(())
    }
}
