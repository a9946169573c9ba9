use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use tracing::{error, info};

use crate::model::quote_request::QuoteRequest;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn create(&self, quote: QuoteRequest) -> RepositoryResult<QuoteRequest>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<QuoteRequest>;
    /// All quotes, newest first. `page` is 1-based.
    async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<QuoteRequest>>;
    /// Quotes owned by one customer, newest first.
    async fn list_by_user(&self, user: ObjectId) -> RepositoryResult<Vec<QuoteRequest>>;
    async fn update_fields(&self, id: ObjectId, fields: Document) -> RepositoryResult<QuoteRequest>;
}

pub struct MongoQuoteRepository {
    collection: mongodb::Collection<QuoteRequest>,
}

impl MongoQuoteRepository {
    pub fn new(db: &mongodb::Database) -> Self {
        MongoQuoteRepository {
            collection: db.collection::<QuoteRequest>("quoterequests"),
        }
    }
}

#[async_trait]
impl QuoteRepository for MongoQuoteRepository {
    #[tracing::instrument(skip(self, quote), fields(user = %quote.user))]
    async fn create(&self, quote: QuoteRequest) -> RepositoryResult<QuoteRequest> {
        info!("Creating new quote request");
        let mut new_quote = quote;
        new_quote.id = Some(ObjectId::new());
        new_quote.status = "Pending".to_string();
        let now = super::now_rfc3339();
        new_quote.created_at = Some(now.clone());
        new_quote.updated_at = Some(now);

        match self.collection.insert_one(new_quote.clone(), None).await {
            Ok(_) => {
                info!("Quote request created successfully");
                Ok(new_quote)
            }
            Err(e) => {
                error!("Failed to create quote request: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<QuoteRequest> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(quote)) => Ok(quote),
            Ok(None) => {
                error!("Quote request not found for ID: {}", id);
                Err(RepositoryError::not_found(format!(
                    "Quote request not found for ID: {}",
                    id
                )))
            }
            Err(e) => {
                error!("Failed to fetch quote request: {}", e);
                Err(RepositoryError::database(format!(
                    "Failed to fetch quote request: {}",
                    e
                )))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(page = page, limit = limit))]
    async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<QuoteRequest>> {
        let skip = u64::from(page.saturating_sub(1)) * u64::from(limit);
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .skip(skip)
            .limit(i64::from(limit))
            .build();
        let mut cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list quotes: {}", e)))?;
        let mut quotes = Vec::new();
        while let Some(item) = cursor.next().await {
            quotes.push(item.map_err(|e| {
                RepositoryError::serialization(format!("Failed to deserialize quote: {}", e))
            })?);
        }
        info!("Fetched {} quote requests", quotes.len());
        Ok(quotes)
    }

    #[tracing::instrument(skip(self), fields(user = %user))]
    async fn list_by_user(&self, user: ObjectId) -> RepositoryResult<Vec<QuoteRequest>> {
        let options = FindOptions::builder().sort(doc! { "createdAt": -1 }).build();
        let mut cursor = self
            .collection
            .find(doc! { "user": user }, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list quotes: {}", e)))?;
        let mut quotes = Vec::new();
        while let Some(item) = cursor.next().await {
            quotes.push(item.map_err(|e| {
                RepositoryError::serialization(format!("Failed to deserialize quote: {}", e))
            })?);
        }
        Ok(quotes)
    }

    #[tracing::instrument(skip(self, fields), fields(id = %id))]
    async fn update_fields(
        &self,
        id: ObjectId,
        mut fields: Document,
    ) -> RepositoryResult<QuoteRequest> {
        fields.insert("updatedAt", super::now_rfc3339());
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to update quote: {}", e)))?;
        if result.matched_count == 0 {
            error!("No quote request found to update for ID: {}", id);
            return Err(RepositoryError::not_found(format!(
                "No quote request found for ID: {}",
                id
            )));
        }
        self.get_by_id(id).await
    }
}
