use rust_decimal::Decimal;
use serde::Serialize;

use super::AccountSnapshot;

/// Aggregates shown in the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub account_count: i64,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_balance: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_daily_profit: Decimal,
    pub total_open_positions: i64,
}

impl DashboardSummary {
    pub fn from_snapshots(snapshots: &[AccountSnapshot]) -> Self {
        Self {
            account_count: snapshots.len() as i64,
            total_balance: snapshots.iter().map(|s| s.balance).sum(),
            total_daily_profit: snapshots.iter().map(|s| s.daily_profit).sum(),
            total_open_positions: snapshots
                .iter()
                .map(|s| i64::from(s.open_position_count))
                .sum(),
        }
    }
}
