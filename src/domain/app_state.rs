use super::{
    dataset::OperationalLine,
    metrics::{estimate_price, CalculatorError, Estimate},
};

/// Dashboard sections, in tab-bar order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Overview,
    Profitability,
    Operations,
    ProfitSharing,
    PriceCalculator,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Profitability,
        Tab::Operations,
        Tab::ProfitSharing,
        Tab::PriceCalculator,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Profitability => "profitability",
            Tab::Operations => "operations",
            Tab::ProfitSharing => "profit-sharing",
            Tab::PriceCalculator => "price-calculator",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Profitability => "Profitabilitas",
            Tab::Operations => "Operasional",
            Tab::ProfitSharing => "Bagi Hasil",
            Tab::PriceCalculator => "Kalkulator Harga",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalculatorPhase {
    Empty,
    Editing,
    Computed,
    /// A result is shown but the inputs have been edited since.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalculatorState {
    pub material: Option<String>,
    pub volume_input: String,
    pub result: Option<Estimate>,
}

impl CalculatorState {
    pub fn phase(&self) -> CalculatorPhase {
        match &self.result {
            Some(_) if self.result_is_stale() => CalculatorPhase::Stale,
            Some(_) => CalculatorPhase::Computed,
            None if self.material.is_none() && self.volume_input.is_empty() => {
                CalculatorPhase::Empty
            }
            None => CalculatorPhase::Editing,
        }
    }

    /// True when the shown result no longer matches the form inputs.
    pub fn result_is_stale(&self) -> bool {
        let Some(result) = &self.result else {
            return false;
        };
        let same_material = self.material.as_deref() == Some(result.material.as_str());
        let same_volume = super::metrics::parse_volume(&self.volume_input)
            .map(|volume| volume == result.volume)
            .unwrap_or(false);
        !(same_material && same_volume)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub active_tab: Tab,
    pub calculator: CalculatorState,
}

impl DashboardState {
    pub fn select_tab(&self, tab: Tab) -> Self {
        Self {
            active_tab: tab,
            ..self.clone()
        }
    }

    /// An empty or whitespace-only selection clears the material.
    pub fn with_material(&self, material: Option<String>) -> Self {
        let material = material.filter(|m| !m.trim().is_empty());
        Self {
            calculator: CalculatorState {
                material,
                ..self.calculator.clone()
            },
            ..self.clone()
        }
    }

    pub fn with_volume_input(&self, volume_input: impl Into<String>) -> Self {
        Self {
            calculator: CalculatorState {
                volume_input: volume_input.into(),
                ..self.calculator.clone()
            },
            ..self.clone()
        }
    }

    /// Runs the estimator over the current form. On error the caller keeps
    /// the existing state, result included.
    pub fn calculate(&self, lines: &[OperationalLine]) -> Result<Self, CalculatorError> {
        let estimate = estimate_price(
            lines,
            self.calculator.material.as_deref(),
            &self.calculator.volume_input,
        )?;
        Ok(Self {
            calculator: CalculatorState {
                result: Some(estimate),
                ..self.calculator.clone()
            },
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{dataset::reference, metrics::CalculatorField};

    #[test]
    fn starts_on_overview_with_empty_calculator() {
        let state = DashboardState::default();
        assert_eq!(state.active_tab, Tab::Overview);
        assert_eq!(state.calculator.phase(), CalculatorPhase::Empty);
        assert!(state.calculator.result.is_none());
    }

    #[test]
    fn every_tab_is_reachable_from_every_tab() {
        for from in Tab::ALL {
            let start = DashboardState::default().select_tab(from);
            for to in Tab::ALL {
                let next = start.select_tab(to);
                assert_eq!(next.active_tab, to);
                assert_eq!(next.calculator, start.calculator);
            }
        }
    }

    #[test]
    fn tab_ids_round_trip_and_are_unique() {
        let ids: Vec<_> = Tab::ALL.iter().map(|tab| tab.id()).collect();
        assert_eq!(
            ids,
            vec![
                "overview",
                "profitability",
                "operations",
                "profit-sharing",
                "price-calculator"
            ]
        );
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_id("settings"), None);
    }

    #[test]
    fn calculate_without_material_leaves_result_untouched() {
        let state = DashboardState::default().with_volume_input("10");
        let err = state.calculate(reference().operations()).unwrap_err();
        assert_eq!(
            err,
            CalculatorError::InputIncomplete {
                field: CalculatorField::Material
            }
        );
        assert!(state.calculator.result.is_none());
        assert_eq!(state.calculator.phase(), CalculatorPhase::Editing);
    }

    #[test]
    fn calculate_sets_result_for_batu_split() {
        let state = DashboardState::default()
            .select_tab(Tab::PriceCalculator)
            .with_material(Some("Batu Split".to_string()))
            .with_volume_input("10")
            .calculate(reference().operations())
            .unwrap();
        let result = state.calculator.result.as_ref().unwrap();
        assert_eq!(result.total, 2_400_000.0);
        assert_eq!(state.calculator.phase(), CalculatorPhase::Computed);
        assert_eq!(state.active_tab, Tab::PriceCalculator);
    }

    #[test]
    fn editing_after_calculation_marks_result_stale() {
        let computed = DashboardState::default()
            .with_material(Some("Pasir".to_string()))
            .with_volume_input("5")
            .calculate(reference().operations())
            .unwrap();
        assert_eq!(computed.calculator.result.as_ref().unwrap().total, 1_300_000.0);

        let edited = computed.with_volume_input("6");
        assert_eq!(edited.calculator.phase(), CalculatorPhase::Stale);
        assert_eq!(edited.calculator.result, computed.calculator.result);

        let restored = edited.with_volume_input("5.0");
        assert_eq!(restored.calculator.phase(), CalculatorPhase::Computed);

        let cleared = computed.with_material(Some("  ".to_string()));
        assert_eq!(cleared.calculator.material, None);
        assert!(cleared.calculator.result_is_stale());
    }

    #[test]
    fn failed_recalculation_keeps_previous_result() {
        let computed = DashboardState::default()
            .with_material(Some("Pasir".to_string()))
            .with_volume_input("5")
            .calculate(reference().operations())
            .unwrap();
        let edited = computed.with_volume_input("lima");
        assert!(edited.calculate(reference().operations()).is_err());
        assert_eq!(edited.calculator.result, computed.calculator.result);
    }
}
