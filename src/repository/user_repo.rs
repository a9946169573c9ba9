use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};

use crate::model::user::User;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> RepositoryResult<User>;
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<User>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<User>>;
}

pub struct UserRepositoryImpl {
    collection: mongodb::Collection<User>,
}

impl UserRepositoryImpl {
    pub fn new(db: &mongodb::Database) -> Self {
        UserRepositoryImpl {
            collection: db.collection::<User>("users"),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn insert(&self, mut user: User) -> RepositoryResult<User> {
        user.id = Some(ObjectId::new());
        let now = super::now_rfc3339();
        user.created_at = Some(now.clone());
        user.updated_at = Some(now);
        self.collection
            .insert_one(user.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(user)
    }

    async fn update_fields(&self, id: ObjectId, mut fields: Document) -> RepositoryResult<User> {
        fields.insert("updatedAt", super::now_rfc3339());
        let filter = doc! { "_id": id };
        let update = doc! { "$set": fields };
        let result = self
            .collection
            .update_one(filter.clone(), update, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to update user: {}", e)))?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No user found for ID: {}",
                id
            )));
        }
        self.collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to reload user: {}", e)))?
            .ok_or_else(|| RepositoryError::not_found(format!("No user found for ID: {}", id)))
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let filter = doc! { "email": email };
        let user = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find user by email: {}", e)))?;
        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<User>> {
        let filter = doc! { "_id": id };
        let user = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find user by id: {}", e)))?;
        Ok(user)
    }
}
