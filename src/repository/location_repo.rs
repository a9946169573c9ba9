use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;

use crate::model::location::Location;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn create(&self, location: Location) -> RepositoryResult<Location>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Location>;
    async fn list(&self) -> RepositoryResult<Vec<Location>>;
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<Location>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
}

pub struct MongoLocationRepository {
    collection: mongodb::Collection<Location>,
}

impl MongoLocationRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoLocationRepository {
            collection: db.collection::<Location>("locations"),
        }
    }
}

#[async_trait]
impl LocationRepository for MongoLocationRepository {
    async fn create(&self, location: Location) -> RepositoryResult<Location> {
        let mut new_location = location;
        new_location.id = Some(ObjectId::new());
        let now = super::now_rfc3339();
        new_location.created_at = Some(now.clone());
        new_location.updated_at = Some(now);
        self.collection
            .insert_one(new_location.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(new_location)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Location> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(location)) => Ok(location),
            Ok(None) => Err(RepositoryError::not_found(format!(
                "Location not found for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to fetch location: {}",
                e
            ))),
        }
    }

    async fn list(&self) -> RepositoryResult<Vec<Location>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let mut cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list locations: {}", e)))?;
        let mut locations = Vec::new();
        while let Some(item) = cursor.next().await {
            locations.push(item.map_err(|e| {
                RepositoryError::serialization(format!("Failed to deserialize location: {}", e))
            })?);
        }
        Ok(locations)
    }

    async fn update_fields(&self, id: ObjectId, mut fields: Document) -> RepositoryResult<Location> {
        fields.insert("updatedAt", super::now_rfc3339());
        let filter = doc! { "_id": id };
        let result = self
            .collection
            .update_one(filter.clone(), doc! { "$set": fields }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to update location: {}", e)))?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No location found for ID: {}",
                id
            )));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        let result = self
            .collection
            .delete_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete location: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No location found for ID: {}",
                id
            )));
        }
        Ok(())
    }
}
