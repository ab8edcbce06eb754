// Engine module - pure computation over service payloads
// This layer sits between wire types (evcast-types) and CLI presentation:
// no I/O, no async, no terminal concerns.

pub mod metrics;
pub mod project;
pub mod validate;

pub use metrics::{MetricRow, present_metric_rows};
pub use project::{
    ChartProjection, Dataset, ProjectedView, SeriesStyle, project, project_category_bar,
};
pub use validate::{HorizonInput, ValidationError, parse_horizon};
