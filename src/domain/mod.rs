//! Business figures, derived metrics and the dashboard view model.

pub mod app_state;
pub mod dataset;
pub mod metrics;
pub mod report;

#[allow(unused_imports)]
pub use app_state::{CalculatorPhase, CalculatorState, DashboardState, Tab};
#[allow(unused_imports)]
pub use dataset::{
    Dataset, MaterialFinancials, OperationalLine, OverviewMetric, ProfitShare, Rupiah,
};
#[allow(unused_imports)]
pub use metrics::{
    estimate_price, margin_percent, markup_percent, parse_volume, payback_periods, roi_percent,
    CalculatorError, CalculatorField, Estimate, Percentage,
};
#[allow(unused_imports)]
pub use report::DashboardReport;
