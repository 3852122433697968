pub mod chart;
pub mod kpi_card;
pub mod toast;
