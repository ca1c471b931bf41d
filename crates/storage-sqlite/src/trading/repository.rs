use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use std::sync::Arc;

use tradeshift_core::errors::Result;
use tradeshift_core::trading::{NewTradeOrder, OrderStatus, TradeOrder, TradeOrderRepositoryTrait};

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::trade_orders;
use crate::schema::trade_orders::dsl::*;
use crate::text::format_datetime;

use super::model::TradeOrderDB;

/// Repository for managing trade order records in the database.
pub struct TradeOrderRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TradeOrderRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl TradeOrderRepositoryTrait for TradeOrderRepository {
    fn get_by_id(&self, order_id: &str) -> Result<TradeOrder> {
        let mut conn = get_connection(&self.pool)?;

        let row = trade_orders
            .select(TradeOrderDB::as_select())
            .find(order_id)
            .first::<TradeOrderDB>(&mut conn)
            .into_core()?;

        row.into_domain()
    }

    fn list_for_user(&self, user_id_param: &str, limit: Option<i64>) -> Result<Vec<TradeOrder>> {
        let mut conn = get_connection(&self.pool)?;

        // RFC 3339 text in a fixed offset sorts chronologically.
        let mut query = trade_orders
            .filter(user_id.eq(user_id_param))
            .order(created_at.desc())
            .into_boxed();

        if let Some(cap) = limit {
            query = query.limit(cap);
        }

        let rows = query
            .select(TradeOrderDB::as_select())
            .load::<TradeOrderDB>(&mut conn)
            .into_core()?;

        rows.into_iter().map(TradeOrderDB::into_domain).collect()
    }

    async fn insert(&self, order: NewTradeOrder) -> Result<TradeOrder> {
        self.writer
            .exec(move |conn| {
                let mut row: TradeOrderDB = order.into();
                if row.id.is_empty() {
                    row.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(trade_orders::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                row.into_domain()
            })
            .await
    }

    async fn update_status(
        &self,
        order_id: &str,
        new_status: OrderStatus,
        new_filled_at: Option<DateTime<Utc>>,
    ) -> Result<TradeOrder> {
        let id_owned = order_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(trade_orders.find(&id_owned))
                    .set((
                        status.eq(new_status.as_str()),
                        filled_at.eq(new_filled_at.as_ref().map(format_datetime)),
                    ))
                    .execute(conn)
                    .into_core()?;

                let row = trade_orders
                    .select(TradeOrderDB::as_select())
                    .find(&id_owned)
                    .first::<TradeOrderDB>(conn)
                    .into_core()?;

                row.into_domain()
            })
            .await
    }
}
