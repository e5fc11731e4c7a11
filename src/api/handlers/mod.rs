pub mod accounts;
pub mod dashboard;
pub mod health;
pub mod ingest;
pub mod metrics;
