use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;

use crate::model::container_type::ContainerType;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait ContainerTypeRepository: Send + Sync {
    async fn create(&self, container: ContainerType) -> RepositoryResult<ContainerType>;
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<ContainerType>>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ContainerType>;
    /// All entries when `show_all`, otherwise active only. Sorted by name.
    async fn list(&self, show_all: bool) -> RepositoryResult<Vec<ContainerType>>;
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<ContainerType>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
}

pub struct MongoContainerTypeRepository {
    collection: mongodb::Collection<ContainerType>,
}

impl MongoContainerTypeRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoContainerTypeRepository {
            collection: db.collection::<ContainerType>("containertypes"),
        }
    }
}

#[async_trait]
impl ContainerTypeRepository for MongoContainerTypeRepository {
    async fn create(&self, container: ContainerType) -> RepositoryResult<ContainerType> {
        let mut new_container = container;
        new_container.id = Some(ObjectId::new());
        let now = super::now_rfc3339();
        new_container.created_at = Some(now.clone());
        new_container.updated_at = Some(now);
        self.collection
            .insert_one(new_container.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(new_container)
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<ContainerType>> {
        let container = self
            .collection
            .find_one(doc! { "name": name }, None)
            .await
            .map_err(|e| {
                RepositoryError::database(format!("Failed to find container type: {}", e))
            })?;
        Ok(container)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ContainerType> {
        match self.collection.find_one(doc! { "_id": id }, None).await {
            Ok(Some(container)) => Ok(container),
            Ok(None) => Err(RepositoryError::not_found(format!(
                "Container type not found for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to fetch container type: {}",
                e
            ))),
        }
    }

    async fn list(&self, show_all: bool) -> RepositoryResult<Vec<ContainerType>> {
        let filter = if show_all {
            None
        } else {
            Some(doc! { "status": "active" })
        };
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();
        let mut cursor = self.collection.find(filter, options).await.map_err(|e| {
            RepositoryError::database(format!("Failed to list container types: {}", e))
        })?;
        let mut types = Vec::new();
        while let Some(item) = cursor.next().await {
            types.push(item.map_err(|e| {
                RepositoryError::serialization(format!(
                    "Failed to deserialize container type: {}",
                    e
                ))
            })?);
        }
        Ok(types)
    }

    async fn update_fields(
        &self,
        id: ObjectId,
        mut fields: Document,
    ) -> RepositoryResult<ContainerType> {
        fields.insert("updatedAt", super::now_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await
            .map_err(|e| {
                RepositoryError::database(format!("Failed to update container type: {}", e))
            })?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No container type found for ID: {}",
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
            .map_err(|e| {
                RepositoryError::database(format!("Failed to delete container type: {}", e))
            })?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No container type found for ID: {}",
                id
            )));
        }
        Ok(())
    }
}
