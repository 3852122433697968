//! Compiled-in business figures. Aggregates and share amounts are derived from
//! the base tables when the dataset is built, never restated.

use std::sync::OnceLock;

use serde::Serialize;

/// Amounts are whole Rupiah but kept as `f64` so they mix with fractional volumes.
pub type Rupiah = f64;

/// Identifier for materials; the display name doubles as the lookup key.
pub type MaterialName = String;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaterialFinancials {
    pub name: MaterialName,
    pub capital: Rupiah,
    pub revenue: Rupiah,
    pub profit: Rupiah,
}

impl MaterialFinancials {
    pub fn new(name: impl Into<String>, capital: Rupiah, revenue: Rupiah) -> Self {
        Self {
            name: name.into(),
            capital,
            revenue,
            profit: revenue - capital,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverviewMetric {
    pub category: String,
    pub value: Rupiah,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfitShare {
    pub party: String,
    pub amount: Rupiah,
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperationalLine {
    pub material: MaterialName,
    pub truck_count: u32,
    /// Cubic metres carried by one truck per trip.
    pub unit_volume_per_truck: f64,
    pub buy_price: Rupiah,
    pub sell_price: Rupiah,
}

impl OperationalLine {
    pub fn markup_per_unit(&self) -> Rupiah {
        self.sell_price - self.buy_price
    }

    pub fn fleet_volume(&self) -> f64 {
        self.truck_count as f64 * self.unit_volume_per_truck
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dataset {
    materials: Vec<MaterialFinancials>,
    operations: Vec<OperationalLine>,
    profit_shares: Vec<ProfitShare>,
    overview: Vec<OverviewMetric>,
}

impl Dataset {
    /// Builds the dataset, deriving the overview rows from `materials` and each
    /// share amount from the total net profit.
    pub fn new(
        materials: Vec<MaterialFinancials>,
        operations: Vec<OperationalLine>,
        shares: &[(&str, f64)],
    ) -> Self {
        let total_capital: Rupiah = materials.iter().map(|m| m.capital).sum();
        let total_revenue: Rupiah = materials.iter().map(|m| m.revenue).sum();
        let total_profit: Rupiah = materials.iter().map(|m| m.profit).sum();

        let overview = vec![
            OverviewMetric {
                category: "Modal Kebutuhan".to_string(),
                value: total_capital,
            },
            OverviewMetric {
                category: "Pemasukan".to_string(),
                value: total_revenue,
            },
            OverviewMetric {
                category: "Keuntungan Bersih".to_string(),
                value: total_profit,
            },
        ];

        let profit_shares = shares
            .iter()
            .map(|(party, percentage)| ProfitShare {
                party: party.to_string(),
                amount: total_profit * percentage / 100.0,
                percentage: *percentage,
            })
            .collect();

        Self {
            materials,
            operations,
            profit_shares,
            overview,
        }
    }

    pub fn materials(&self) -> &[MaterialFinancials] {
        &self.materials
    }

    pub fn operations(&self) -> &[OperationalLine] {
        &self.operations
    }

    pub fn profit_shares(&self) -> &[ProfitShare] {
        &self.profit_shares
    }

    pub fn overview(&self) -> &[OverviewMetric] {
        &self.overview
    }

    pub fn total_capital(&self) -> Rupiah {
        self.materials.iter().map(|m| m.capital).sum()
    }

    pub fn total_revenue(&self) -> Rupiah {
        self.materials.iter().map(|m| m.revenue).sum()
    }

    pub fn total_net_profit(&self) -> Rupiah {
        self.materials.iter().map(|m| m.profit).sum()
    }

    pub fn operation(&self, material: &str) -> Option<&OperationalLine> {
        self.operations.iter().find(|line| line.material == material)
    }

    /// Names offered by the price calculator, in table order.
    pub fn material_names(&self) -> Vec<MaterialName> {
        self.operations
            .iter()
            .map(|line| line.material.clone())
            .collect()
    }

    /// Lists cross-table inconsistencies. Empty for a well-formed dataset.
    pub fn consistency_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.profit_shares.is_empty() {
            let pct_sum: f64 = self.profit_shares.iter().map(|s| s.percentage).sum();
            if (pct_sum - 100.0).abs() > 1e-9 {
                issues.push(format!(
                    "profit share percentages sum to {pct_sum}, expected 100"
                ));
            }

            let amount_sum: Rupiah = self.profit_shares.iter().map(|s| s.amount).sum();
            let total = self.total_net_profit();
            if (amount_sum - total).abs() > 0.5 {
                issues.push(format!(
                    "profit share amounts sum to {amount_sum:.0}, net profit is {total:.0}"
                ));
            }
        }

        for line in &self.operations {
            if line.sell_price <= line.buy_price {
                issues.push(format!(
                    "{}: sell price {:.0} does not exceed buy price {:.0}",
                    line.material, line.sell_price, line.buy_price
                ));
            }
            if !self.materials.iter().any(|m| m.name == line.material) {
                issues.push(format!(
                    "{}: operational line has no financial summary",
                    line.material
                ));
            }
        }

        issues
    }
}

static REFERENCE: OnceLock<Dataset> = OnceLock::new();

/// The business figures the dashboard ships with.
pub fn reference() -> &'static Dataset {
    REFERENCE.get_or_init(|| {
        Dataset::new(
            vec![
                MaterialFinancials::new("Batu Split", 385_000_000.0, 420_000_000.0),
                MaterialFinancials::new("Pasir", 411_250_000.0, 455_000_000.0),
            ],
            vec![
                OperationalLine {
                    material: "Batu Split".to_string(),
                    truck_count: 10,
                    unit_volume_per_truck: 25.0,
                    buy_price: 220_000.0,
                    sell_price: 240_000.0,
                },
                OperationalLine {
                    material: "Pasir".to_string(),
                    truck_count: 10,
                    unit_volume_per_truck: 25.0,
                    buy_price: 235_000.0,
                    sell_price: 260_000.0,
                },
            ],
            &[("Investor", 50.0), ("Pelaksana", 50.0)],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_profit_is_revenue_minus_capital() {
        for material in reference().materials() {
            assert_eq!(material.profit, material.revenue - material.capital);
        }
        assert_eq!(reference().materials()[0].profit, 35_000_000.0);
        assert_eq!(reference().materials()[1].profit, 43_750_000.0);
    }

    #[test]
    fn overview_rows_are_column_sums() {
        let overview = reference().overview();
        assert_eq!(overview.len(), 3);
        assert_eq!(overview[0].category, "Modal Kebutuhan");
        assert_eq!(overview[0].value, 796_250_000.0);
        assert_eq!(overview[1].value, 875_000_000.0);
        assert_eq!(overview[2].value, 78_750_000.0);
    }

    #[test]
    fn profit_shares_split_total_net_profit() {
        let shares = reference().profit_shares();
        let pct: f64 = shares.iter().map(|s| s.percentage).sum();
        let amount: f64 = shares.iter().map(|s| s.amount).sum();
        assert_eq!(pct, 100.0);
        assert_eq!(amount, 78_750_000.0);
        assert!(shares.iter().all(|s| s.amount == 39_375_000.0));
    }

    #[test]
    fn reference_dataset_is_consistent() {
        assert!(reference().consistency_issues().is_empty());
    }

    #[test]
    fn consistency_issues_flag_bad_shares_and_prices() {
        let dataset = Dataset::new(
            vec![MaterialFinancials::new("Pasir", 100.0, 150.0)],
            vec![OperationalLine {
                material: "Kerikil".to_string(),
                truck_count: 1,
                unit_volume_per_truck: 10.0,
                buy_price: 50.0,
                sell_price: 50.0,
            }],
            &[("Investor", 60.0), ("Pelaksana", 30.0)],
        );
        let issues = dataset.consistency_issues();
        assert_eq!(issues.len(), 4, "{issues:?}");
        assert!(issues[0].contains("sum to 90"));
        assert!(issues.iter().any(|i| i.contains("does not exceed")));
        assert!(issues.iter().any(|i| i.contains("no financial summary")));
    }

    #[test]
    fn operation_lookup_and_derived_line_values() {
        let line = reference().operation("Pasir").expect("pasir line");
        assert_eq!(line.markup_per_unit(), 25_000.0);
        assert_eq!(line.fleet_volume(), 250.0);
        assert!(reference().operation("Semen").is_none());
        assert_eq!(reference().material_names(), vec!["Batu Split", "Pasir"]);
    }

    #[test]
    fn dataset_serializes_for_export() {
        let json = serde_json::to_value(reference().operations()).expect("serialize");
        assert_eq!(json[0]["material"], "Batu Split");
        assert_eq!(json[1]["sell_price"], 260_000.0);
    }
}
