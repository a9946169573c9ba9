use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use tracing::{info, instrument};

use crate::dto::offering_dto::{CreateServiceRequest, UpdateServiceRequest};
use crate::model::service_offering::ServiceOffering;
use crate::model::ACTIVE_STATUSES;
use crate::repository::service_offering_repo::{
    MongoServiceOfferingRepository, ServiceOfferingRepository,
};
use crate::util::error::ServiceError;

#[async_trait]
pub trait OfferingService: Send + Sync {
    async fn list_active_services(&self) -> Result<Vec<ServiceOffering>, ServiceError>;
    async fn create_service(
        &self,
        request: CreateServiceRequest,
    ) -> Result<ServiceOffering, ServiceError>;
    async fn update_service(
        &self,
        id: ObjectId,
        update: UpdateServiceRequest,
    ) -> Result<ServiceOffering, ServiceError>;
    async fn delete_service(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct OfferingServiceImpl {
    pub offering_repo: MongoServiceOfferingRepository,
}

#[async_trait]
impl OfferingService for OfferingServiceImpl {
    async fn list_active_services(&self) -> Result<Vec<ServiceOffering>, ServiceError> {
        self.offering_repo
            .list_active()
            .await
            .map_err(ServiceError::from)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_service(
        &self,
        request: CreateServiceRequest,
    ) -> Result<ServiceOffering, ServiceError> {
        info!("Creating service");
        if self
            .offering_repo
            .find_by_name(&request.name)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict("Service already exists.".to_string()));
        }

        let offering = ServiceOffering {
            id: None,
            name: request.name,
            description: request.description,
            status: "active".to_string(),
            created_at: None,
            updated_at: None,
        };
        self.offering_repo
            .create(offering)
            .await
            .map_err(ServiceError::from)
    }

    #[instrument(skip(self, update), fields(id = %id))]
    async fn update_service(
        &self,
        id: ObjectId,
        update: UpdateServiceRequest,
    ) -> Result<ServiceOffering, ServiceError> {
        let mut fields = doc! {};
        if let Some(name) = update.name {
            fields.insert("name", name);
        }
        if let Some(description) = update.description {
            fields.insert("description", description);
        }
        if let Some(status) = update.status {
            if !ACTIVE_STATUSES.contains(&status.as_str()) {
                return Err(ServiceError::InvalidInput(
                    "Status must be 'active' or 'inactive'".to_string(),
                ));
            }
            fields.insert("status", status);
        }

        if fields.is_empty() {
            return self
                .offering_repo
                .get_by_id(id)
                .await
                .map_err(ServiceError::from);
        }
        self.offering_repo
            .update_fields(id, fields)
            .await
            .map_err(ServiceError::from)
    }

    async fn delete_service(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.offering_repo
            .delete(id)
            .await
            .map_err(ServiceError::from)
    }
}
