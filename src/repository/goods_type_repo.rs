use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;

use crate::model::goods_type::GoodsType;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait GoodsTypeRepository: Send + Sync {
    async fn create(&self, goods: GoodsType) -> RepositoryResult<GoodsType>;
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<GoodsType>>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<GoodsType>;
    /// Active entries only, sorted by name. The public dropdown view.
    async fn list_active(&self) -> RepositoryResult<Vec<GoodsType>>;
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<GoodsType>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
}

pub struct MongoGoodsTypeRepository {
    collection: mongodb::Collection<GoodsType>,
}

impl MongoGoodsTypeRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoGoodsTypeRepository {
            collection: db.collection::<GoodsType>("goodstypes"),
        }
    }
}

#[async_trait]
impl GoodsTypeRepository for MongoGoodsTypeRepository {
    async fn create(&self, goods: GoodsType) -> RepositoryResult<GoodsType> {
        let mut new_goods = goods;
        new_goods.id = Some(ObjectId::new());
        let now = super::now_rfc3339();
        new_goods.created_at = Some(now.clone());
        new_goods.updated_at = Some(now);
        self.collection
            .insert_one(new_goods.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(new_goods)
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<GoodsType>> {
        let goods = self
            .collection
            .find_one(doc! { "name": name }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find goods type: {}", e)))?;
        Ok(goods)
    }

    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<GoodsType> {
        match self.collection.find_one(doc! { "_id": id }, None).await {
            Ok(Some(goods)) => Ok(goods),
            Ok(None) => Err(RepositoryError::not_found(format!(
                "Goods type not found for ID: {}",
                id
            ))),
            Err(e) => Err(RepositoryError::database(format!(
                "Failed to fetch goods type: {}",
                e
            ))),
        }
    }

    async fn list_active(&self) -> RepositoryResult<Vec<GoodsType>> {
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();
        let mut cursor = self
            .collection
            .find(doc! { "status": "active" }, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list goods types: {}", e)))?;
        let mut types = Vec::new();
        while let Some(item) = cursor.next().await {
            types.push(item.map_err(|e| {
                RepositoryError::serialization(format!("Failed to deserialize goods type: {}", e))
            })?);
        }
        Ok(types)
    }

    async fn update_fields(&self, id: ObjectId, mut fields: Document) -> RepositoryResult<GoodsType> {
        fields.insert("updatedAt", super::now_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to update goods type: {}", e)))?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No goods type found for ID: {}",
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
            .map_err(|e| RepositoryError::database(format!("Failed to delete goods type: {}", e)))?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No goods type found for ID: {}",
                id
            )));
        }
        Ok(())
    }
}
