use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;

use crate::model::contact_message::ContactMessage;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create(&self, message: ContactMessage) -> RepositoryResult<ContactMessage>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ContactMessage>;
    async fn list(&self) -> RepositoryResult<Vec<ContactMessage>>;
    async fn update_fields(&self, id: ObjectId, fields: Document)
        -> RepositoryResult<ContactMessage>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
}

pub struct MongoContactMessageRepository {
    collection: mongodb::Collection<ContactMessage>,
}

impl MongoContactMessageRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoContactMessageRepository {
            collection: db.collection::<ContactMessage>("contactmessages"),
        }
    }
}

#[async_trait]
impl ContactMessageRepository for MongoContactMessageRepository {
    async fn create(&self, message: ContactMessage) -> RepositoryResult<ContactMessage> {
        let mut new_message = message;
        new_message.id = Some(ObjectId::new());
        let now = super::now_rfc3339();
        new_message.created_at = Some(now.clone());
        new_message.updated_at = Some(now);
        self.collection
            .insert_one(new_message.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(new_message)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<ContactMessage> {
        match self.collection.find_one(doc! { "_id": id }, None).await {
            Ok(Some(message)) => Ok(message),
            Ok(None) => Err(RepositoryError::not_found(format!(
                "Message not found for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to fetch message: {}",
                e
            ))),
        }
    }

    async fn list(&self) -> RepositoryResult<Vec<ContactMessage>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let mut cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list messages: {}", e)))?;
        let mut messages = Vec::new();
        while let Some(item) = cursor.next().await {
            messages.push(item.map_err(|e| {
                RepositoryError::serialization(format!("Failed to deserialize message: {}", e))
            })?);
        }
        Ok(messages)
    }

    async fn update_fields(
        &self,
        id: ObjectId,
        mut fields: Document,
    ) -> RepositoryResult<ContactMessage> {
        fields.insert("updatedAt", super::now_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to update message: {}", e)))?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No message found for ID: {}",
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
            .map_err(|e| RepositoryError::database(format!("Failed to delete message: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No message found for ID: {}",
                id
            )));
        }
        Ok(())
    }
}
