use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use tracing::{info, instrument};

use crate::dto::container_dto::{CreateContainerTypeRequest, UpdateContainerTypeRequest};
use crate::model::container_type::{ContainerDimensions, ContainerType};
use crate::model::ACTIVE_STATUSES;
use crate::repository::container_type_repo::{
    ContainerTypeRepository, MongoContainerTypeRepository,
};
use crate::util::error::ServiceError;

#[async_trait]
pub trait ContainerService: Send + Sync {
    async fn create_container_type(
        &self,
        request: CreateContainerTypeRequest,
    ) -> Result<ContainerType, ServiceError>;
    /// Catalog view; `show_all` lets admins see inactive entries too.
    async fn list_container_types(&self, show_all: bool)
        -> Result<Vec<ContainerType>, ServiceError>;
    async fn update_container_type(
        &self,
        id: ObjectId,
        update: UpdateContainerTypeRequest,
    ) -> Result<ContainerType, ServiceError>;
    async fn delete_container_type(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct ContainerServiceImpl {
    pub container_repo: MongoContainerTypeRepository,
}

#[async_trait]
impl ContainerService for ContainerServiceImpl {
    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_container_type(
        &self,
        request: CreateContainerTypeRequest,
    ) -> Result<ContainerType, ServiceError> {
        info!("Creating container type");
        if self
            .container_repo
            .find_by_name(&request.name)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(
                "Container type already exists.".to_string(),
            ));
        }

        let container = ContainerType {
            id: None,
            name: request.name,
            description: request.description,
            dimensions: ContainerDimensions {
                inside_length: request.dimensions.inside_length,
                inside_width: request.dimensions.inside_width,
                inside_height: request.dimensions.inside_height,
                door_width: request.dimensions.door_width,
                door_height: request.dimensions.door_height,
                cbm_capacity: request.dimensions.cbm_capacity,
            },
            tare_weight: request.tare_weight,
            max_cargo_weight: request.max_cargo_weight,
            status: "active".to_string(),
            created_at: None,
            updated_at: None,
        };
        self.container_repo
            .create(container)
            .await
            .map_err(ServiceError::from)
    }

    async fn list_container_types(
        &self,
        show_all: bool,
    ) -> Result<Vec<ContainerType>, ServiceError> {
        self.container_repo
            .list(show_all)
            .await
            .map_err(ServiceError::from)
    }

    #[instrument(skip(self, update), fields(id = %id))]
    async fn update_container_type(
        &self,
        id: ObjectId,
        update: UpdateContainerTypeRequest,
    ) -> Result<ContainerType, ServiceError> {
        let mut fields = doc! {};
        if let Some(name) = update.name {
            fields.insert("name", name);
        }
        if let Some(description) = update.description {
            fields.insert("description", description);
        }
        if let Some(dimensions) = update.dimensions {
            let value = bson::to_bson(&dimensions)
                .map_err(|e| ServiceError::InternalError(format!("BSON error: {}", e)))?;
            fields.insert("dimensions", value);
        }
        if let Some(tare_weight) = update.tare_weight {
            fields.insert("tareWeight", tare_weight);
        }
        if let Some(max_cargo_weight) = update.max_cargo_weight {
            fields.insert("maxCargoWeight", max_cargo_weight);
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
                .container_repo
                .get_by_id(id)
                .await
                .map_err(ServiceError::from);
        }
        self.container_repo
            .update_fields(id, fields)
            .await
            .map_err(ServiceError::from)
    }

    async fn delete_container_type(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.container_repo
            .delete(id)
            .await
            .map_err(ServiceError::from)
    }
}
