use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use tracing::{info, instrument};

use crate::dto::location_dto::{CreateLocationRequest, UpdateLocationRequest};
use crate::model::location::{Location, LOCATION_TYPES};
use crate::model::ACTIVE_STATUSES;
use crate::repository::location_repo::{LocationRepository, MongoLocationRepository};
use crate::util::error::ServiceError;

#[async_trait]
pub trait LocationService: Send + Sync {
    async fn create_location(&self, request: CreateLocationRequest)
        -> Result<Location, ServiceError>;
    async fn get_location(&self, id: ObjectId) -> Result<Location, ServiceError>;
    async fn list_locations(&self) -> Result<Vec<Location>, ServiceError>;
    async fn update_location(
        &self,
        id: ObjectId,
        update: UpdateLocationRequest,
    ) -> Result<Location, ServiceError>;
    async fn delete_location(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct LocationServiceImpl {
    pub location_repo: MongoLocationRepository,
}

fn check_location_type(value: &str) -> Result<(), ServiceError> {
    if LOCATION_TYPES.contains(&value) {
        Ok(())
    } else {
        Err(ServiceError::InvalidInput(
            "Type must be 'pickup' or 'drop-off'".to_string(),
        ))
    }
}

#[async_trait]
impl LocationService for LocationServiceImpl {
    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_location(
        &self,
        request: CreateLocationRequest,
    ) -> Result<Location, ServiceError> {
        info!("Creating location");
        check_location_type(&request.location_type)?;

        let location = Location {
            id: None,
            name: request.name,
            location_type: request.location_type,
            country: request.country,
            city: request.city,
            address: request.address,
            postal_code: request.postal_code,
            coordinates: request.coordinates,
            status: "active".to_string(),
            created_at: None,
            updated_at: None,
        };
        self.location_repo
            .create(location)
            .await
            .map_err(ServiceError::from)
    }

    async fn get_location(&self, id: ObjectId) -> Result<Location, ServiceError> {
        self.location_repo
            .get_by_id(id)
            .await
            .map_err(ServiceError::from)
    }

    async fn list_locations(&self) -> Result<Vec<Location>, ServiceError> {
        self.location_repo.list().await.map_err(ServiceError::from)
    }

    #[instrument(skip(self, update), fields(id = %id))]
    async fn update_location(
        &self,
        id: ObjectId,
        update: UpdateLocationRequest,
    ) -> Result<Location, ServiceError> {
        let mut fields = doc! {};
        if let Some(name) = update.name {
            fields.insert("name", name);
        }
        if let Some(location_type) = update.location_type {
            check_location_type(&location_type)?;
            fields.insert("type", location_type);
        }
        if let Some(country) = update.country {
            fields.insert("country", country);
        }
        if let Some(city) = update.city {
            fields.insert("city", city);
        }
        if let Some(address) = update.address {
            fields.insert("address", address);
        }
        if let Some(postal_code) = update.postal_code {
            fields.insert("postalCode", postal_code);
        }
        if let Some(coordinates) = update.coordinates {
            let value = bson::to_bson(&coordinates)
                .map_err(|e| ServiceError::InternalError(format!("BSON error: {}", e)))?;
            fields.insert("coordinates", value);
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
            return self.get_location(id).await;
        }
        self.location_repo
            .update_fields(id, fields)
            .await
            .map_err(ServiceError::from)
    }

    async fn delete_location(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.location_repo
            .delete(id)
            .await
            .map_err(ServiceError::from)
    }
}
