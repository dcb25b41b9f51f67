//! Test helpers.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use salvo::{affix_state::inject, prelude::*};
use tokio::sync::Mutex;

use promotions_app::{
    context::AppContext,
    domain::promotions::{
        MockPromotionsService, PromotionsService, PromotionsServiceError,
        data::PromotionData,
        records::{PromotionId, PromotionRecord, PromotionType},
    },
};

use crate::state::State;

/// A mock that fails the test on any call.
pub(crate) fn strict_promotions_mock() -> MockPromotionsService {
    let mut promotions = MockPromotionsService::new();

    promotions.expect_list_promotions().never();
    promotions.expect_find_promotion().never();
    promotions.expect_find_promotions_by_name().never();
    promotions.expect_find_promotions_by_type().never();
    promotions.expect_create_promotion().never();
    promotions.expect_update_promotion().never();
    promotions.expect_delete_promotion().never();
    promotions.expect_activate_promotion().never();
    promotions.expect_deactivate_promotion().never();

    promotions
}

pub(crate) fn state_with_promotions(promotions: impl PromotionsService + 'static) -> Arc<State> {
    State::from_app_context(AppContext {
        promotions: Arc::new(promotions),
    })
}

pub(crate) fn promotions_service(promotions: MockPromotionsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_promotions(promotions)))
            .push(route),
    )
}

/// In-memory promotions store with the same observable behaviour as the
/// database-backed service.
#[derive(Debug, Default)]
pub(crate) struct InMemoryPromotions {
    rows: Mutex<Rows>,
}

#[derive(Debug, Default)]
struct Rows {
    next_id: i64,
    promotions: BTreeMap<i64, PromotionRecord>,
}

impl InMemoryPromotions {
    async fn filtered(&self, keep: impl Fn(&PromotionRecord) -> bool) -> Vec<PromotionRecord> {
        self.rows
            .lock()
            .await
            .promotions
            .values()
            .filter(|promotion| keep(promotion))
            .cloned()
            .collect()
    }

    async fn set_status(
        &self,
        promotion: PromotionId,
        status: bool,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let mut rows = self.rows.lock().await;

        let stored = rows
            .promotions
            .get_mut(&promotion.into_i64())
            .ok_or(PromotionsServiceError::NotFound)?;

        stored.status = status;

        Ok(stored.clone())
    }
}

fn record(id: PromotionId, data: PromotionData) -> PromotionRecord {
    PromotionRecord {
        id,
        name: data.name,
        promo_type: data.promo_type,
        product_id: data.product_id,
        amount: data.amount,
        start_date: data.start_date,
        end_date: data.end_date,
        status: data.status,
    }
}

#[async_trait]
impl PromotionsService for InMemoryPromotions {
    async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        Ok(self.filtered(|_| true).await)
    }

    async fn find_promotion(
        &self,
        promotion: PromotionId,
    ) -> Result<Option<PromotionRecord>, PromotionsServiceError> {
        Ok(self
            .rows
            .lock()
            .await
            .promotions
            .get(&promotion.into_i64())
            .cloned())
    }

    async fn find_promotions_by_name(
        &self,
        name: String,
    ) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        Ok(self.filtered(|promotion| promotion.name == name).await)
    }

    async fn find_promotions_by_type(
        &self,
        promo_type: PromotionType,
    ) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        Ok(self
            .filtered(|promotion| promotion.promo_type == promo_type)
            .await)
    }

    async fn create_promotion(
        &self,
        promotion: PromotionData,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let mut rows = self.rows.lock().await;

        rows.next_id += 1;

        let id = rows.next_id;
        let created = record(PromotionId::from_i64(id), promotion);

        rows.promotions.insert(id, created.clone());

        Ok(created)
    }

    async fn update_promotion(
        &self,
        promotion: PromotionId,
        update: PromotionData,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let mut rows = self.rows.lock().await;

        let stored = rows
            .promotions
            .get_mut(&promotion.into_i64())
            .ok_or(PromotionsServiceError::NotFound)?;

        *stored = record(promotion, update);

        Ok(stored.clone())
    }

    async fn delete_promotion(&self, promotion: PromotionId) -> Result<(), PromotionsServiceError> {
        self.rows
            .lock()
            .await
            .promotions
            .remove(&promotion.into_i64());

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
