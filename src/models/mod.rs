pub mod snapshot;
pub mod summary;

pub use snapshot::{AccountSnapshot, SnapshotPayload};
pub use summary::DashboardSummary;
