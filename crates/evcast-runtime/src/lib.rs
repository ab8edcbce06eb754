pub mod config;
pub mod controller;
pub mod error;
pub mod resource;

pub use config::{Config, DEFAULT_SERVICE_URL, resolve_service_url};
pub use controller::{Command, DashboardController, DashboardSnapshot};
pub use error::{Error, Result};
pub use resource::{Phase, RemoteResource, RequestToken};
