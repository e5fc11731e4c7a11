pub mod dashboard;
pub mod handlers;
pub mod router;
