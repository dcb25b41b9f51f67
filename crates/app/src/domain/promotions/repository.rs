//! Promotions Repository

use jiff_sqlx::Date as SqlxDate;
use sqlx::{
    FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query::QueryAs, query_as,
};

use crate::domain::promotions::{
    data::PromotionData,
    records::{PromotionId, PromotionRecord, PromotionType},
};

const LIST_PROMOTIONS_SQL: &str = include_str!("sql/list_promotions.sql");
const GET_PROMOTION_SQL: &str = include_str!("sql/get_promotion.sql");
const FIND_PROMOTIONS_BY_NAME_SQL: &str = include_str!("sql/find_promotions_by_name.sql");
const FIND_PROMOTIONS_BY_TYPE_SQL: &str = include_str!("sql/find_promotions_by_type.sql");
const CREATE_PROMOTION_SQL: &str = include_str!("sql/create_promotion.sql");
const UPDATE_PROMOTION_SQL: &str = include_str!("sql/update_promotion.sql");
const SET_PROMOTION_STATUS_SQL: &str = include_str!("sql/set_promotion_status.sql");
const DELETE_PROMOTION_SQL: &str = include_str!("sql/delete_promotion.sql");

type PromotionQuery<'q> = QueryAs<'q, Postgres, PromotionRecord, sqlx::postgres::PgArguments>;

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPromotionsRepository;

impl PgPromotionsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_promotions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(LIST_PROMOTIONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionId,
    ) -> Result<Option<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(GET_PROMOTION_SQL)
            .bind(promotion.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_promotions_by_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(FIND_PROMOTIONS_BY_NAME_SQL)
            .bind(name)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_promotions_by_type(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promo_type: PromotionType,
    ) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(FIND_PROMOTIONS_BY_TYPE_SQL)
            .bind(promo_type.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: &PromotionData,
    ) -> Result<PromotionRecord, sqlx::Error> {
        bind_data(query_as(CREATE_PROMOTION_SQL), promotion)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionId,
        update: &PromotionData,
    ) -> Result<Option<PromotionRecord>, sqlx::Error> {
        bind_data(
            query_as(UPDATE_PROMOTION_SQL).bind(promotion.into_i64()),
            update,
        )
        .fetch_optional(&mut **tx)
        .await
    }

    pub(crate) async fn set_promotion_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionId,
        status: bool,
    ) -> Result<Option<PromotionRecord>, sqlx::Error> {
        query_as::<Postgres, PromotionRecord>(SET_PROMOTION_STATUS_SQL)
            .bind(promotion.into_i64())
            .bind(status)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: PromotionId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PROMOTION_SQL)
            .bind(promotion.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn bind_data<'q>(query: PromotionQuery<'q>, data: &'q PromotionData) -> PromotionQuery<'q> {
    query
        .bind(data.name.as_str())
        .bind(data.promo_type.as_str())
        .bind(data.product_id)
        .bind(data.amount)
        .bind(SqlxDate::from(data.start_date))
        .bind(SqlxDate::from(data.end_date))
        .bind(data.status)
}

impl<'r> FromRow<'r, PgRow> for PromotionRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let promo_type: String = row.try_get("promo_type")?;

        let promo_type =
            promo_type
                .parse::<PromotionType>()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "promo_type".to_string(),
                    source: Box::new(e),
                })?;

        Ok(Self {
            id: PromotionId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            promo_type,
            product_id: row.try_get("product_id")?,
            amount: row.try_get("amount")?,
            start_date: row.try_get::<SqlxDate, _>("start_date")?.to_jiff(),
            end_date: row.try_get::<SqlxDate, _>("end_date")?.to_jiff(),
            status: row.try_get("status")?,
        })
    }
}
