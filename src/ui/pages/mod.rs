pub mod operations;
pub mod overview;
pub mod price_calculator;
pub mod profit_sharing;
pub mod profitability;

pub use operations::OperationsPage;
pub use overview::OverviewPage;
pub use price_calculator::PriceCalculatorPage;
pub use profit_sharing::ProfitSharingPage;
pub use profitability::ProfitabilityPage;
