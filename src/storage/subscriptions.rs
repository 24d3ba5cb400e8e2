//! Subscription gateway: domain operations over the pooled store.
//!
//! Every operation is a single parameterized statement; atomicity and
//! visibility are delegated to SQLite. No retries — failures surface
//! immediately to the caller.

use rusqlite::{params, OptionalExtension, Row};

use super::pool::StorePool;
use super::StoreError;
use crate::model::{CategorySpend, Subscription, SubscriptionInput};

const SELECT_COLUMNS: &str =
    "id, name, category, cost, billing_cycle, next_billing, description";

/// Gateway translating subscription operations to store queries.
///
/// Cheap to clone; handlers hold a clone each and call it from blocking
/// tasks.
#[derive(Clone)]
pub struct SubscriptionStore {
    pool: StorePool,
}

impl SubscriptionStore {
    /// Create a gateway over an initialized pool.
    pub fn new(pool: StorePool) -> Self {
        Self { pool }
    }

    /// Liveness check, forwarded from the store health endpoint.
    pub fn ping(&self) -> Result<(), StoreError> {
        self.pool.ping()
    }

    /// Fetch all subscriptions ordered by next billing date ascending.
    pub fn list(&self) -> Result<Vec<Subscription>, StoreError> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM subscriptions ORDER BY next_billing ASC"
        ))?;
        let rows = stmt
            .query_map([], map_subscription)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Fetch one subscription by id.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` when no row matches.
    pub fn get(&self, id: i64) -> Result<Subscription, StoreError> {
        let conn = self.pool.get()?;
        conn.query_row(
            &format!("SELECT {SELECT_COLUMNS} FROM subscriptions WHERE id = ?1"),
            params![id],
            map_subscription,
        )
        .optional()?
        .ok_or(StoreError::NotFound)
    }

    /// Store a new record and return it with its assigned id.
    pub fn insert(&self, input: SubscriptionInput) -> Result<Subscription, StoreError> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO subscriptions (name, category, cost, billing_cycle, next_billing, description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                input.name,
                input.category,
                input.cost,
                input.billing_cycle,
                input.next_billing,
                input.description
            ],
        )?;

        let id = conn.last_insert_rowid();
        Ok(input.into_record(id))
    }

    /// Replace all mutable fields of the record matching `id`.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` when zero rows are affected.
    pub fn update(
        &self,
        id: i64,
        input: SubscriptionInput,
    ) -> Result<Subscription, StoreError> {
        let conn = self.pool.get()?;
        let affected = conn.execute(
            "UPDATE subscriptions
             SET name = ?1, category = ?2, cost = ?3, billing_cycle = ?4,
                 next_billing = ?5, description = ?6
             WHERE id = ?7",
            params![
                input.name,
                input.category,
                input.cost,
                input.billing_cycle,
                input.next_billing,
                input.description,
                id
            ],
        )?;

        if affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(input.into_record(id))
    }

    /// Remove the record matching `id`.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` when zero rows are affected.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.pool.get()?;
        let affected = conn.execute("DELETE FROM subscriptions WHERE id = ?1", params![id])?;

        if affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    /// Sum cost per category, ordered by summed cost descending.
    pub fn spend_by_category(&self) -> Result<Vec<CategorySpend>, StoreError> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT category, SUM(cost) AS total_cost
             FROM subscriptions
             GROUP BY category
             ORDER BY total_cost DESC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CategorySpend {
                    category: row.get(0)?,
                    cost: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Fetch records billing within `[today, today + days]` inclusive,
    /// ordered by next billing date ascending.
    pub fn upcoming_within_days(&self, days: u32) -> Result<Vec<Subscription>, StoreError> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM subscriptions
             WHERE next_billing BETWEEN date('now') AND date('now', ?1)
             ORDER BY next_billing ASC"
        ))?;
        let window = format!("+{days} days");
        let rows = stmt
            .query_map(params![window], map_subscription)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

/// Map a row in SELECT_COLUMNS order to a record.
fn map_subscription(row: &Row<'_>) -> Result<Subscription, rusqlite::Error> {
    Ok(Subscription {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        cost: row.get(3)?,
        billing_cycle: row.get(4)?,
        next_billing: row.get(5)?,
        description: row.get(6)?,
    })
}
