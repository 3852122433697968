//! Snapshot of every figure the dashboard shows, used for the copy-to-clipboard
//! summary and the JSON export.

use serde::Serialize;

use super::{
    dataset::{Dataset, Rupiah},
    metrics::{margin_percent, markup_percent, payback_periods, roi_percent, Percentage},
};
use crate::util::format::{format_currency, format_number};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaterialMargin {
    pub material: String,
    pub capital: Rupiah,
    pub revenue: Rupiah,
    pub profit: Rupiah,
    pub margin: Percentage,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaterialMarkup {
    pub material: String,
    pub markup_per_unit: Rupiah,
    pub markup: Percentage,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShareLine {
    pub party: String,
    pub percentage: f64,
    pub amount: Rupiah,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardReport {
    pub total_capital: Rupiah,
    pub total_revenue: Rupiah,
    pub net_profit: Rupiah,
    pub margin: Percentage,
    pub roi: Percentage,
    pub payback_months: Option<f64>,
    pub margins: Vec<MaterialMargin>,
    pub markups: Vec<MaterialMarkup>,
    pub shares: Vec<ShareLine>,
}

impl DashboardReport {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let total_capital = dataset.total_capital();
        let total_revenue = dataset.total_revenue();
        let net_profit = dataset.total_net_profit();

        Self {
            total_capital,
            total_revenue,
            net_profit,
            margin: margin_percent(net_profit, total_revenue),
            roi: roi_percent(net_profit, total_capital),
            payback_months: payback_periods(total_capital, net_profit),
            margins: dataset
                .materials()
                .iter()
                .map(|m| MaterialMargin {
                    material: m.name.clone(),
                    capital: m.capital,
                    revenue: m.revenue,
                    profit: m.profit,
                    margin: margin_percent(m.profit, m.revenue),
                })
                .collect(),
            markups: dataset
                .operations()
                .iter()
                .map(|line| MaterialMarkup {
                    material: line.material.clone(),
                    markup_per_unit: line.markup_per_unit(),
                    markup: markup_percent(line.sell_price, line.buy_price),
                })
                .collect(),
            shares: dataset
                .profit_shares()
                .iter()
                .map(|share| ShareLine {
                    party: share.party.clone(),
                    percentage: share.percentage,
                    amount: share.amount,
                })
                .collect(),
        }
    }

    pub fn payback_label(&self) -> String {
        self.payback_months
            .map(|months| format!("~{months:.1} bulan"))
            .unwrap_or_else(|| "n/a".to_string())
    }

    /// The ROI formula with the figures filled in, as shown under the ROI card.
    pub fn roi_formula(&self) -> String {
        format!(
            "ROI = ({} / {}) × 100% = {}",
            format_number(self.net_profit),
            format_number(self.total_capital),
            self.roi
        )
    }

    pub fn summary_text(&self) -> String {
        let mut lines = vec![
            "Ringkasan Bisnis Trucking".to_string(),
            format!("Total Modal: {}", format_currency(self.total_capital)),
            format!("Total Pemasukan: {}", format_currency(self.total_revenue)),
            format!(
                "Keuntungan Bersih: {} (margin {})",
                format_currency(self.net_profit),
                self.margin.one_decimal()
            ),
            format!("ROI: {} | Payback: {}", self.roi, self.payback_label()),
        ];

        for margin in &self.margins {
            lines.push(format!(
                "{}: keuntungan {} (margin {})",
                margin.material,
                format_currency(margin.profit),
                margin.margin
            ));
        }
        for markup in &self.markups {
            lines.push(format!(
                "{}: markup {} per kubik ({})",
                markup.material,
                format_currency(markup.markup_per_unit),
                markup.markup
            ));
        }
        if !self.shares.is_empty() {
            let shares = self
                .shares
                .iter()
                .map(|share| {
                    format!(
                        "{} {}% = {}",
                        share.party,
                        format_number(share.percentage),
                        format_currency(share.amount)
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("Bagi hasil: {shares}"));
        }

        lines.join("\n")
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::reference;

    #[test]
    fn report_derives_headline_figures() {
        let report = DashboardReport::from_dataset(reference());
        assert_eq!(report.total_capital, 796_250_000.0);
        assert_eq!(report.net_profit, 78_750_000.0);
        assert_eq!(report.roi.to_string(), "9.89%");
        assert_eq!(report.payback_label(), "~10.1 bulan");
        assert_eq!(
            report.roi_formula(),
            "ROI = (78.750.000 / 796.250.000) × 100% = 9.89%"
        );
    }

    #[test]
    fn summary_text_lists_materials_and_shares() {
        let text = DashboardReport::from_dataset(reference()).summary_text();
        assert!(text.contains("Total Modal: Rp\u{a0}796.250.000"));
        assert!(text.contains("Keuntungan Bersih: Rp\u{a0}78.750.000 (margin 9.0%)"));
        assert!(text.contains("Batu Split: keuntungan Rp\u{a0}35.000.000 (margin 8.33%)"));
        assert!(text.contains("Pasir: markup Rp\u{a0}25.000 per kubik (10.64%)"));
        assert!(text.contains("Investor 50% = Rp\u{a0}39.375.000"));
    }

    #[test]
    fn json_export_carries_not_applicable_marker() {
        let empty = Dataset::new(Vec::new(), Vec::new(), &[]);
        let json = DashboardReport::from_dataset(&empty).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["roi"], "NotApplicable");
        assert!(value["payback_months"].is_null());
    }
}
