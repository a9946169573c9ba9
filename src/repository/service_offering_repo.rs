use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;

use crate::model::service_offering::ServiceOffering;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait ServiceOfferingRepository: Send + Sync {
    async fn create(&self, offering: ServiceOffering) -> RepositoryResult<ServiceOffering>;
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<ServiceOffering>>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ServiceOffering>;
    /// Active entries only, sorted by name.
    async fn list_active(&self) -> RepositoryResult<Vec<ServiceOffering>>;
    async fn update_fields(&self, id: ObjectId, fields: Document)
        -> RepositoryResult<ServiceOffering>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
}

pub struct MongoServiceOfferingRepository {
    collection: mongodb::Collection<ServiceOffering>,
}

impl MongoServiceOfferingRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoServiceOfferingRepository {
            collection: db.collection::<ServiceOffering>("services"),
        }
    }
}

#[async_trait]
impl ServiceOfferingRepository for MongoServiceOfferingRepository {
    async fn create(&self, offering: ServiceOffering) -> RepositoryResult<ServiceOffering> {
        let mut new_offering = offering;
        new_offering.id = Some(ObjectId::new());
        let now = super::now_rfc3339();
        new_offering.created_at = Some(now.clone());
        new_offering.updated_at = Some(now);
        self.collection
            .insert_one(new_offering.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(new_offering)
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<ServiceOffering>> {
        let offering = self
            .collection
            .find_one(doc! { "name": name }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find service: {}", e)))?;
        Ok(offering)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ServiceOffering> {
        match self.collection.find_one(doc! { "_id": id }, None).await {
            Ok(Some(offering)) => Ok(offering),
            Ok(None) => Err(RepositoryError::not_found(format!(
                "Service not found for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to fetch service: {}",
                e
            ))),
        }
    }

    async fn list_active(&self) -> RepositoryResult<Vec<ServiceOffering>> {
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();
        let mut cursor = self
            .collection
            .find(doc! { "status": "active" }, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list services: {}", e)))?;
        let mut services = Vec::new();
        while let Some(item) = cursor.next().await {
            services.push(item.map_err(|e| {
                RepositoryError::serialization(format!("Failed to deserialize service: {}", e))
            })?);
        }
        Ok(services)
    }

    async fn update_fields(
        &self,
        id: ObjectId,
        mut fields: Document,
    ) -> RepositoryResult<ServiceOffering> {
        fields.insert("updatedAt", super::now_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to update service: {}", e)))?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No service found for ID: {}",
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
            .map_err(|e| RepositoryError::database(format!("Failed to delete service: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No service found for ID: {}",
                id
            )));
        }
        Ok(())
    }
}
