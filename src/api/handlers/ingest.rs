use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::db::snapshot_repo;
use crate::errors::AppError;
use crate::metrics::record_ingest;
use crate::models::SnapshotPayload;
use crate::AppState;

/// POST /api/data — store the latest snapshot for an account
pub async fn ingest(
    State(state): State<AppState>,
    payload: Result<Json<SnapshotPayload>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    // Only a body that is not a JSON object is refused here; bad field
    // values are left for the store to reject.
    let Json(payload) = payload?;

    match snapshot_repo::upsert_snapshot(&state.db, &payload).await {
        Ok(snapshot) => {
            record_ingest(true);
            tracing::debug!(
                account_id = %snapshot.account_id,
                balance = %snapshot.balance,
                daily_profit = %snapshot.daily_profit,
                "Snapshot stored"
            );
            Ok(Json(json!({ "ok": true })))
        }
        Err(e) => {
            record_ingest(false);
            tracing::warn!(
                account_id = payload.account_id.as_deref().unwrap_or("<missing>"),
                error = %e,
                "Snapshot upsert failed"
            );
            Err(AppError::Internal(e))
        }
    }
}
