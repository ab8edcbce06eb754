pub mod health;
pub mod models;

pub use health::HealthReport;
pub use models::*;
