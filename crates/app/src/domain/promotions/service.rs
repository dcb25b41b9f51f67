//! Promotions Service

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::promotions::{
        data::PromotionData,
        errors::PromotionsServiceError,
        records::{PromotionId, PromotionRecord, PromotionType},
        repository::PgPromotionsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgPromotionsService {
    db: Db,
    repository: PgPromotionsRepository,
}

impl PgPromotionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPromotionsRepository::new(),
        }
    }

    async fn set_status(
        &self,
        promotion: PromotionId,
        status: bool,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .set_promotion_status(&mut tx, promotion, status)
            .await?
            .ok_or(PromotionsServiceError::NotFound)?;

        tx.commit().await?;

        info!(promotion_id = %promotion, status, "changed promotion status");

        Ok(updated)
    }
}

#[async_trait]
impl PromotionsService for PgPromotionsService {
    async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let promotions = self.repository.list_promotions(&mut tx).await?;

        tx.commit().await?;

        debug!(count = promotions.len(), "listed promotions");

        Ok(promotions)
    }

    async fn find_promotion(
        &self,
        promotion: PromotionId,
    ) -> Result<Option<PromotionRecord>, PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let found = self.repository.find_promotion(&mut tx, promotion).await?;

        tx.commit().await?;

        debug!(promotion_id = %promotion, found = found.is_some(), "looked up promotion");

        Ok(found)
    }

    async fn find_promotions_by_name(
        &self,
        name: String,
    ) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let promotions = self
            .repository
            .find_promotions_by_name(&mut tx, &name)
            .await?;

        tx.commit().await?;

        Ok(promotions)
    }

    async fn find_promotions_by_type(
        &self,
        promo_type: PromotionType,
    ) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let promotions = self
            .repository
            .find_promotions_by_type(&mut tx, promo_type)
            .await?;

        tx.commit().await?;

        Ok(promotions)
    }

    #[tracing::instrument(
        name = "promotions.service.create_promotion",
        skip(self, promotion),
        fields(
            promotion_name = %promotion.name,
            promo_type = %promotion.promo_type,
            promotion_id = tracing::field::Empty
        ),
        err
    )]
    async fn create_promotion(
        &self,
        promotion: PromotionData,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .repository
            .create_promotion(&mut tx, &promotion)
            .await?;

        tx.commit().await?;

        tracing::Span::current().record("promotion_id", tracing::field::display(created.id));

        info!(promotion_id = %created.id, "created promotion");

        Ok(created)
    }

    #[tracing::instrument(
        name = "promotions.service.update_promotion",
        skip(self, update),
        fields(promotion_id = %promotion),
        err
    )]
    async fn update_promotion(
        &self,
        promotion: PromotionId,
        update: PromotionData,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_promotion(&mut tx, promotion, &update)
            .await?
            .ok_or(PromotionsServiceError::NotFound)?;

        tx.commit().await?;

        info!(promotion_id = %promotion, "updated promotion");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "promotions.service.delete_promotion",
        skip(self),
        fields(promotion_id = %promotion),
        err
    )]
    async fn delete_promotion(&self, promotion: PromotionId) -> Result<(), PromotionsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_promotion(&mut tx, promotion).await?;

        tx.commit().await?;

        info!(promotion_id = %promotion, rows_affected, "deleted promotion");

        Ok(())
    }

    async fn activate_promotion(
        &self,
        promotion: PromotionId,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        self.set_status(promotion, true).await
    }

    async fn deactivate_promotion(
        &self,
        promotion: PromotionId,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        self.set_status(promotion, false).await
    }
}

#[automock]
#[async_trait]
pub trait PromotionsService: Send + Sync {
    /// Retrieves every promotion, in storage order.
    async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, PromotionsServiceError>;

    /// Looks up a single promotion. A missing promotion is `Ok(None)`.
    async fn find_promotion(
        &self,
        promotion: PromotionId,
    ) -> Result<Option<PromotionRecord>, PromotionsServiceError>;

    /// Retrieves promotions whose name matches exactly.
    async fn find_promotions_by_name(
        &self,
        name: String,
    ) -> Result<Vec<PromotionRecord>, PromotionsServiceError>;

    /// Retrieves promotions of the given type.
    async fn find_promotions_by_type(
        &self,
        promo_type: PromotionType,
    ) -> Result<Vec<PromotionRecord>, PromotionsServiceError>;

    /// Stores a new promotion under a freshly assigned id.
    async fn create_promotion(
        &self,
        promotion: PromotionData,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    /// Replaces every field of an existing promotion except its id.
    async fn update_promotion(
        &self,
        promotion: PromotionId,
        update: PromotionData,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    /// Deletes a promotion. Deleting a missing promotion succeeds.
    async fn delete_promotion(&self, promotion: PromotionId) -> Result<(), PromotionsServiceError>;

    /// Marks a promotion active.
    async fn activate_promotion(
        &self,
        promotion: PromotionId,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    /// Marks a promotion inactive.
    async fn deactivate_promotion(
        &self,
        promotion: PromotionId,
    ) -> Result<PromotionRecord, PromotionsServiceError>;
}
