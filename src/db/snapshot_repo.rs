use sqlx::PgPool;

use crate::models::{AccountSnapshot, SnapshotPayload};

/// Insert a snapshot, or overwrite every field of the existing row for the
/// same account. `last_updated` is always set by the database.
///
/// Values arrive as text and are cast here, so malformed numbers and a
/// missing or blank `account_id` fail as storage errors.
pub async fn upsert_snapshot(
    pool: &PgPool,
    payload: &SnapshotPayload,
) -> anyhow::Result<AccountSnapshot> {
    let snapshot = sqlx::query_as::<_, AccountSnapshot>(
        r#"
        INSERT INTO account_snapshots (
            account_id, display_name, balance, total_return_pct, daily_profit,
            open_position_count, closed_position_count, position_size,
            daily_return_pct, last_updated
        )
        VALUES (
            $1, $2,
            COALESCE($3::numeric, 0),
            COALESCE($4::numeric, 0),
            COALESCE($5::numeric, 0),
            COALESCE($6::numeric::int, 0),
            COALESCE($7::numeric::int, 0),
            COALESCE($8::numeric, 0),
            COALESCE($9::numeric, 0),
            NOW()
        )
        ON CONFLICT (account_id) DO UPDATE SET
            display_name = EXCLUDED.display_name,
            balance = EXCLUDED.balance,
            total_return_pct = EXCLUDED.total_return_pct,
            daily_profit = EXCLUDED.daily_profit,
            open_position_count = EXCLUDED.open_position_count,
            closed_position_count = EXCLUDED.closed_position_count,
            position_size = EXCLUDED.position_size,
            daily_return_pct = EXCLUDED.daily_return_pct,
            last_updated = NOW()
        RETURNING *
        "#,
    )
    .bind(payload.account_id.as_deref())
    .bind(payload.display_name())
    .bind(payload.balance.as_deref())
    .bind(payload.total_return_pct.as_deref())
    .bind(payload.daily_profit.as_deref())
    .bind(payload.open_position_count.as_deref())
    .bind(payload.closed_position_count.as_deref())
    .bind(payload.position_size.as_deref())
    .bind(payload.daily_return_pct.as_deref())
    .fetch_one(pool)
    .await?;

    Ok(snapshot)
}

/// All snapshots, richest account first.
pub async fn list_snapshots(pool: &PgPool) -> anyhow::Result<Vec<AccountSnapshot>> {
    let snapshots = sqlx::query_as::<_, AccountSnapshot>(
        "SELECT * FROM account_snapshots ORDER BY balance DESC, account_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(snapshots)
}

pub async fn count_snapshots(pool: &PgPool) -> anyhow::Result<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM account_snapshots")
        .fetch_one(pool)
        .await?;

    Ok(row.0)
}
