use axum::extract::State;
use axum::Json;

use crate::db::snapshot_repo;
use crate::errors::AppError;
use crate::metrics::set_tracked_accounts;
use crate::models::{AccountSnapshot, DashboardSummary};
use crate::AppState;

/// GET /api/accounts — every stored snapshot, highest balance first
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AccountSnapshot>>, AppError> {
    let snapshots = snapshot_repo::list_snapshots(&state.db).await?;
    set_tracked_accounts(snapshots.len());

    Ok(Json(snapshots))
}

/// GET /api/summary — the dashboard header totals
pub async fn summary(State(state): State<AppState>) -> Result<Json<DashboardSummary>, AppError> {
    let snapshots = snapshot_repo::list_snapshots(&state.db).await?;
    set_tracked_accounts(snapshots.len());

    Ok(Json(DashboardSummary::from_snapshots(&snapshots)))
}
