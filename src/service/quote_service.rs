use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use tracing::{error, info, instrument};

use crate::dto::quote_dto::{CreateQuoteRequest, UpdateQuoteStatusRequest};
use crate::model::quote_request::{QuoteDimensions, QuoteRequest, PAYMENT_TERMS, QUOTE_STATUSES};
use crate::repository::quote_repo::{MongoQuoteRepository, QuoteRepository};
use crate::util::error::ServiceError;

#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Customer submits a new quote request; owner comes from the session.
    async fn submit_quote(
        &self,
        user: ObjectId,
        request: CreateQuoteRequest,
    ) -> Result<QuoteRequest, ServiceError>;
    async fn my_quotes(&self, user: ObjectId) -> Result<Vec<QuoteRequest>, ServiceError>;
    async fn list_quotes(&self, page: u32, limit: u32) -> Result<Vec<QuoteRequest>, ServiceError>;
    /// Admin prices or rejects a quote.
    async fn update_quote_status(
        &self,
        id: ObjectId,
        update: UpdateQuoteStatusRequest,
    ) -> Result<QuoteRequest, ServiceError>;
}

pub struct QuoteServiceImpl {
    pub quote_repo: MongoQuoteRepository,
}

fn parse_object_id(value: &str, field: &str) -> Result<ObjectId, ServiceError> {
    ObjectId::parse_str(value)
        .map_err(|_| ServiceError::InvalidInput(format!("Invalid {} id", field)))
}

#[async_trait]
impl QuoteService for QuoteServiceImpl {
    #[instrument(skip(self, request), fields(user = %user))]
    async fn submit_quote(
        &self,
        user: ObjectId,
        request: CreateQuoteRequest,
    ) -> Result<QuoteRequest, ServiceError> {
        info!("Submitting quote request");

        if !PAYMENT_TERMS.contains(&request.payment_term.as_str()) {
            return Err(ServiceError::InvalidInput(format!(
                "Invalid payment term: {}",
                request.payment_term
            )));
        }

        let quote = QuoteRequest {
            id: None,
            user,
            pickup_location: parse_object_id(&request.pickup_location, "pickup location")?,
            drop_location: parse_object_id(&request.drop_location, "drop location")?,
            goods_type: parse_object_id(&request.goods_type, "goods type")?,
            container_type: parse_object_id(&request.container_type, "container type")?,
            dimensions: QuoteDimensions {
                length: request.dimensions.length,
                width: request.dimensions.width,
                height: request.dimensions.height,
                weight: request.dimensions.weight,
            },
            payment_term: request.payment_term,
            status: "Pending".to_string(),
            final_quote_amount: None,
            additional_notes: request.additional_notes,
            created_at: None,
            updated_at: None,
        };

        let res = self.quote_repo.create(quote).await;
        match &res {
            Ok(_) => info!("Quote request submitted"),
            Err(e) => error!("Failed to submit quote request: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(user = %user))]
    async fn my_quotes(&self, user: ObjectId) -> Result<Vec<QuoteRequest>, ServiceError> {
        self.quote_repo
            .list_by_user(user)
            .await
            .map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(page, limit))]
    async fn list_quotes(&self, page: u32, limit: u32) -> Result<Vec<QuoteRequest>, ServiceError> {
        self.quote_repo
            .list(page, limit)
            .await
            .map_err(ServiceError::from)
    }

    #[instrument(skip(self, update), fields(id = %id, status = %update.status))]
    async fn update_quote_status(
        &self,
        id: ObjectId,
        update: UpdateQuoteStatusRequest,
    ) -> Result<QuoteRequest, ServiceError> {
        info!("Updating quote status");
        if !QUOTE_STATUSES.contains(&update.status.as_str()) {
            return Err(ServiceError::InvalidInput(
                "Invalid status provided.".to_string(),
            ));
        }

        let mut fields = doc! { "status": &update.status };
        if let Some(amount) = update.final_quote_amount {
            fields.insert("finalQuoteAmount", amount);
        }

        let res = self.quote_repo.update_fields(id, fields).await;
        match &res {
            Ok(_) => info!("Quote status updated"),
            Err(e) => error!("Failed to update quote status: {e}"),
        }
        res.map_err(ServiceError::from)
    }
}
