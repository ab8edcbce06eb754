pub mod common;
pub mod dashboard;
pub mod report;

pub use common::StatusLevel;
pub use dashboard::*;
pub use report::*;
