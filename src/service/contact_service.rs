use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use tracing::{info, instrument};

use crate::dto::contact_dto::CreateContactMessageRequest;
use crate::model::contact_message::{ContactMessage, MESSAGE_STATUSES};
use crate::repository::contact_message_repo::{
    ContactMessageRepository, MongoContactMessageRepository,
};
use crate::util::error::ServiceError;

#[async_trait]
pub trait ContactService: Send + Sync {
    async fn submit_message(
        &self,
        request: CreateContactMessageRequest,
    ) -> Result<ContactMessage, ServiceError>;
    async fn list_messages(&self) -> Result<Vec<ContactMessage>, ServiceError>;
    async fn get_message(&self, id: ObjectId) -> Result<ContactMessage, ServiceError>;
    async fn update_message_status(
        &self,
        id: ObjectId,
        status: String,
    ) -> Result<ContactMessage, ServiceError>;
    async fn delete_message(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct ContactServiceImpl {
    pub message_repo: MongoContactMessageRepository,
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn submit_message(
        &self,
        request: CreateContactMessageRequest,
    ) -> Result<ContactMessage, ServiceError> {
        info!("Submitting contact message");
        let message = ContactMessage {
            id: None,
            name: request.name,
            email: request.email,
            phone: request.phone,
            subject: request.subject,
            message: request.message,
            status: "pending".to_string(),
            created_at: None,
            updated_at: None,
        };
        self.message_repo
            .create(message)
            .await
            .map_err(ServiceError::from)
    }

    async fn list_messages(&self) -> Result<Vec<ContactMessage>, ServiceError> {
        self.message_repo.list().await.map_err(ServiceError::from)
    }

    async fn get_message(&self, id: ObjectId) -> Result<ContactMessage, ServiceError> {
        self.message_repo
            .get_by_id(id)
            .await
            .map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id, status = %status))]
    async fn update_message_status(
        &self,
        id: ObjectId,
        status: String,
    ) -> Result<ContactMessage, ServiceError> {
        if !MESSAGE_STATUSES.contains(&status.as_str()) {
            return Err(ServiceError::InvalidInput("Invalid status.".to_string()));
        }
        self.message_repo
            .update_fields(id, doc! { "status": status })
            .await
            .map_err(ServiceError::from)
    }

    async fn delete_message(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.message_repo
            .delete(id)
            .await
            .map_err(ServiceError::from)
    }
}
