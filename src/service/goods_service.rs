use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use tracing::{info, instrument};

use crate::dto::goods_dto::{CreateGoodsTypeRequest, UpdateGoodsTypeRequest};
use crate::model::goods_type::GoodsType;
use crate::model::ACTIVE_STATUSES;
use crate::repository::goods_type_repo::{GoodsTypeRepository, MongoGoodsTypeRepository};
use crate::util::error::ServiceError;

#[async_trait]
pub trait GoodsService: Send + Sync {
    async fn create_goods_type(
        &self,
        request: CreateGoodsTypeRequest,
    ) -> Result<GoodsType, ServiceError>;
    async fn list_goods_types(&self) -> Result<Vec<GoodsType>, ServiceError>;
    async fn update_goods_type(
        &self,
        id: ObjectId,
        update: UpdateGoodsTypeRequest,
    ) -> Result<GoodsType, ServiceError>;
    async fn delete_goods_type(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct GoodsServiceImpl {
    pub goods_repo: MongoGoodsTypeRepository,
}

#[async_trait]
impl GoodsService for GoodsServiceImpl {
    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_goods_type(
        &self,
        request: CreateGoodsTypeRequest,
    ) -> Result<GoodsType, ServiceError> {
        info!("Creating goods type");
        if self.goods_repo.find_by_name(&request.name).await?.is_some() {
            return Err(ServiceError::Conflict(
                "Goods type already exists.".to_string(),
            ));
        }

        let goods = GoodsType {
            id: None,
            name: request.name,
            description: request.description,
            status: "active".to_string(),
            created_at: None,
            updated_at: None,
        };
        self.goods_repo
            .create(goods)
            .await
            .map_err(ServiceError::from)
    }

    async fn list_goods_types(&self) -> Result<Vec<GoodsType>, ServiceError> {
        self.goods_repo
            .list_active()
            .await
            .map_err(ServiceError::from)
    }

    #[instrument(skip(self, update), fields(id = %id))]
    async fn update_goods_type(
        &self,
        id: ObjectId,
        update: UpdateGoodsTypeRequest,
    ) -> Result<GoodsType, ServiceError> {
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
                .goods_repo
                .get_by_id(id)
                .await
                .map_err(ServiceError::from);
        }
        self.goods_repo
            .update_fields(id, fields)
            .await
            .map_err(ServiceError::from)
    }

    async fn delete_goods_type(&self, id: ObjectId) -> Result<(), ServiceError> {
        self.goods_repo.delete(id).await.map_err(ServiceError::from)
    }
}
