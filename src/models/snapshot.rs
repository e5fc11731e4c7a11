use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Database row for the account_snapshots table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AccountSnapshot {
    pub account_id: String,
    pub display_name: Option<String>,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub balance: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_return_pct: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub daily_profit: Decimal,
    pub open_position_count: i32,
    pub closed_position_count: i32,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub position_size: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub daily_return_pct: Decimal,
    pub last_updated: DateTime<Utc>,
}

/// Body of `POST /api/data`, as posted by the trading terminal.
///
/// Every value is kept as the sender's text and cast by Postgres on write,
/// so coercion and rejection both happen in the store. Scalars of any JSON
/// type are accepted; a missing or `null` value stores as zero (or NULL for
/// `display_name`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotPayload {
    #[serde(default, deserialize_with = "scalar_text")]
    pub account_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub balance: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub total_return_pct: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub daily_profit: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub open_position_count: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub closed_position_count: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub position_size: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub daily_return_pct: Option<String>,
}

impl SnapshotPayload {
    /// Blank names are stored as NULL so the dashboard falls back to its placeholder.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref().filter(|name| !name.is_empty())
    }
}

// Terminals post account numbers as integers and amounts as numbers or
// strings; all of them travel as trimmed text.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(other) => Some(other.to_string()),
    };
    Ok(text)
}
