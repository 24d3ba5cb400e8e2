//! Aggregate statistics handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tokio::task::spawn_blocking;

use super::error::ApiError;
use super::AppState;
use crate::model::Stats;

/// Records billing within this many days count as "upcoming".
pub const UPCOMING_WINDOW_DAYS: u32 = 7;

/// Compute total and per-category spend plus the upcoming-bills window.
///
/// `totalMonthly` is the sum of the per-category sums, which equals the
/// sum of cost over all stored records for any category partition.
pub async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.clone();
    let stats = spawn_blocking(move || -> Result<Stats, crate::storage::StoreError> {
        let by_category = store.spend_by_category()?;
        let upcoming = store.upcoming_within_days(UPCOMING_WINDOW_DAYS)?;
        let total_monthly = by_category.iter().map(|c| c.cost).sum();

        Ok(Stats {
            total_monthly,
            by_category,
            upcoming,
        })
    })
    .await??;

    Ok(Json(stats))
}
