pub mod dashboard;
pub mod doctor;
pub mod forecast;
pub mod metrics;
