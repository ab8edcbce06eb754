pub mod error;
mod service;

pub use error::{Error, Result};
pub use service::{ServiceClient, error_detail};
