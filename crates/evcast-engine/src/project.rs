use evcast_types::ForecastPoint;

/// Chart-ready derivation of one forecast response.
///
/// Recomputed in full whenever the underlying forecast changes and replaced
/// atomically, never mutated in place. An empty view (from an empty
/// response) drives the "no predictions" display path instead of a render.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedView {
    /// Predicted sales with confidence bounds, one value per month.
    pub sales: ChartProjection,
    /// Total charging demand, one value per month.
    pub demand: ChartProjection,
    /// Per-category demand for the farthest forecast month.
    pub category_demand: ChartProjection,
    /// One row per forecast month for the textual breakdown, service order,
    /// nothing aggregated or reordered.
    pub rows: Vec<ForecastPoint>,
}

impl ProjectedView {
    pub fn empty() -> Self {
        Self {
            sales: ChartProjection::empty(SALES_TITLE),
            demand: ChartProjection::empty(DEMAND_TITLE),
            category_demand: ChartProjection::empty(CATEGORY_TITLE),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One chart's worth of data: x-axis labels plus ordered datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartProjection {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartProjection {
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            labels: Vec::new(),
            datasets: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.datasets.is_empty()
    }
}

/// A named series within a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

/// How a dataset wants to be drawn. Semantic only; concrete colors and
/// markers are the renderer's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    /// Primary solid line.
    Line,
    /// Confidence-bound companion line, drawn dashed or dimmed.
    Bound,
    /// Categorical bar.
    Bar,
}

const SALES_TITLE: &str = "Predicted total EV sales over time";
const DEMAND_TITLE: &str = "Estimated total charging demand (kWh) over time";
const CATEGORY_TITLE: &str = "Category-wise charging demand";

/// Derive all chart projections and table rows from a forecast response.
///
/// An empty input produces an all-empty view without error. The category
/// bar covers only the last month, the farthest point of the horizon.
pub fn project(points: &[ForecastPoint]) -> ProjectedView {
    if points.is_empty() {
        return ProjectedView::empty();
    }

    let labels: Vec<String> = points.iter().map(|p| p.month_label()).collect();

    let sales = ChartProjection {
        title: SALES_TITLE.to_string(),
        labels: labels.clone(),
        datasets: vec![
            Dataset {
                name: "Predicted sales".to_string(),
                values: points.iter().map(|p| p.total_predicted_sales).collect(),
                style: SeriesStyle::Line,
            },
            Dataset {
                name: "Lower bound".to_string(),
                values: points.iter().map(|p| p.lower_bound_total_sales).collect(),
                style: SeriesStyle::Bound,
            },
            Dataset {
                name: "Upper bound".to_string(),
                values: points.iter().map(|p| p.upper_bound_total_sales).collect(),
                style: SeriesStyle::Bound,
            },
        ],
    };

    let demand = ChartProjection {
        title: DEMAND_TITLE.to_string(),
        labels,
        datasets: vec![Dataset {
            name: "Est. charging demand (kWh)".to_string(),
            values: points
                .iter()
                .map(|p| p.total_predicted_charging_demand_kwh)
                .collect(),
            style: SeriesStyle::Line,
        }],
    };

    ProjectedView {
        sales,
        demand,
        category_demand: project_category_bar(points, points.len() - 1),
        rows: points.to_vec(),
    }
}

/// Category bar for one forecast month's breakdown. The dashboard always
/// shows the last month; callers may pick any index.
///
/// Out-of-range index or an empty breakdown yields an explicit empty
/// projection, never an error.
pub fn project_category_bar(points: &[ForecastPoint], index: usize) -> ChartProjection {
    let Some(point) = points.get(index) else {
        return ChartProjection::empty(CATEGORY_TITLE);
    };

    let title = format!("{} - {}", CATEGORY_TITLE, point.month_label());
    if point.category_breakdown.is_empty() {
        return ChartProjection::empty(title);
    }

    ChartProjection {
        title,
        labels: point
            .category_breakdown
            .iter()
            .map(|c| c.category.clone())
            .collect(),
        datasets: vec![Dataset {
            name: "Est. charging demand (kWh)".to_string(),
            values: point
                .category_breakdown
                .iter()
                .map(|c| c.predicted_charging_demand_kwh)
                .collect(),
            style: SeriesStyle::Bar,
        }],
    }
}
