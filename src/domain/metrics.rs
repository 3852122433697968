use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::dataset::{OperationalLine, Rupiah};

/// A ratio expressed in percent, or `NotApplicable` when the denominator
/// made it meaningless.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Percentage {
    Value(f64),
    NotApplicable,
}

impl Percentage {
    fn ratio(numerator: f64, denominator: f64) -> Self {
        if !numerator.is_finite() || !denominator.is_finite() || denominator <= 0.0 {
            return Percentage::NotApplicable;
        }
        Percentage::Value(numerator / denominator * 100.0)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Percentage::Value(v) => Some(*v),
            Percentage::NotApplicable => None,
        }
    }

    /// Coarser rendering used on summary cards, e.g. `9.0%`.
    pub fn one_decimal(&self) -> String {
        match self {
            Percentage::Value(v) => format!("{v:.1}%"),
            Percentage::NotApplicable => "n/a".to_string(),
        }
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percentage::Value(v) => write!(f, "{v:.2}%"),
            Percentage::NotApplicable => write!(f, "n/a"),
        }
    }
}

pub fn margin_percent(profit: Rupiah, revenue: Rupiah) -> Percentage {
    Percentage::ratio(profit, revenue)
}

pub fn markup_percent(sell_price: Rupiah, buy_price: Rupiah) -> Percentage {
    Percentage::ratio(sell_price - buy_price, buy_price)
}

pub fn roi_percent(net_profit: Rupiah, total_capital: Rupiah) -> Percentage {
    Percentage::ratio(net_profit, total_capital)
}

/// Number of profit periods needed to earn back the capital.
pub fn payback_periods(total_capital: Rupiah, net_profit: Rupiah) -> Option<f64> {
    if !net_profit.is_finite() || !total_capital.is_finite() || net_profit <= 0.0 {
        return None;
    }
    Some(total_capital / net_profit)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalculatorField {
    Material,
    Volume,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalculatorError {
    #[error("{}", incomplete_message(.field))]
    InputIncomplete { field: CalculatorField },
    #[error("Material tidak ditemukan: {0}")]
    MaterialNotFound(String),
}

fn incomplete_message(field: &CalculatorField) -> &'static str {
    match field {
        CalculatorField::Material => "Mohon lengkapi semua input kalkulator.",
        CalculatorField::Volume => {
            "Mohon lengkapi semua input kalkulator. Volume harus berupa angka lebih dari nol."
        }
    }
}

/// A computed price estimate together with the inputs it was computed from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Estimate {
    pub material: String,
    pub volume: f64,
    pub unit_price: Rupiah,
    pub total: Rupiah,
}

/// Parses the volume field. Accepts `12.5` and `12,5`; anything that is not a
/// positive finite number counts as missing input.
pub fn parse_volume(input: &str) -> Result<f64, CalculatorError> {
    let missing = CalculatorError::InputIncomplete {
        field: CalculatorField::Volume,
    };
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(missing);
    }
    let normalized = if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        trimmed.replacen(',', ".", 1)
    };
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(missing),
    }
}

pub fn estimate_price(
    lines: &[OperationalLine],
    material: Option<&str>,
    volume_input: &str,
) -> Result<Estimate, CalculatorError> {
    let material = material.map(str::trim).filter(|m| !m.is_empty());
    let Some(material) = material else {
        return Err(CalculatorError::InputIncomplete {
            field: CalculatorField::Material,
        });
    };
    if volume_input.trim().is_empty() {
        return Err(CalculatorError::InputIncomplete {
            field: CalculatorField::Volume,
        });
    }

    let line = lines
        .iter()
        .find(|line| line.material == material)
        .ok_or_else(|| CalculatorError::MaterialNotFound(material.to_string()))?;

    let volume = parse_volume(volume_input)?;
    let total = line.sell_price * volume;
    if !total.is_finite() {
        return Err(CalculatorError::InputIncomplete {
            field: CalculatorField::Volume,
        });
    }

    Ok(Estimate {
        material: line.material.clone(),
        volume,
        unit_price: line.sell_price,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::reference;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn margin_matches_profit_over_revenue() {
        let cases = [(385_000_000.0, 420_000_000.0), (411_250_000.0, 455_000_000.0), (90.0, 100.0)];
        for (capital, revenue) in cases {
            let margin = margin_percent(revenue - capital, revenue);
            let expected = (revenue - capital) / revenue * 100.0;
            assert!(close(margin.value().unwrap(), expected));
        }
        let materials = reference().materials();
        assert_eq!(
            margin_percent(materials[0].profit, materials[0].revenue).to_string(),
            "8.33%"
        );
        assert_eq!(
            margin_percent(materials[1].profit, materials[1].revenue).to_string(),
            "9.62%"
        );
    }

    #[test]
    fn zero_denominators_are_not_applicable() {
        assert_eq!(margin_percent(10.0, 0.0), Percentage::NotApplicable);
        assert_eq!(markup_percent(10.0, 0.0), Percentage::NotApplicable);
        assert_eq!(roi_percent(10.0, 0.0), Percentage::NotApplicable);
        assert_eq!(margin_percent(f64::NAN, 10.0), Percentage::NotApplicable);
        assert_eq!(Percentage::NotApplicable.to_string(), "n/a");
        assert_eq!(payback_periods(100.0, 0.0), None);
    }

    #[test]
    fn markup_grows_with_sell_price() {
        let buy = 220_000.0;
        let mut previous = f64::NEG_INFINITY;
        for sell in [100_000.0, 220_000.0, 230_000.0, 240_000.0, 500_000.0] {
            let markup = markup_percent(sell, buy).value().unwrap();
            assert!(markup > previous);
            previous = markup;
        }
        assert_eq!(markup_percent(240_000.0, 220_000.0).to_string(), "9.09%");
        assert_eq!(markup_percent(260_000.0, 235_000.0).to_string(), "10.64%");
    }

    #[test]
    fn roi_and_payback_derive_from_dataset() {
        let data = reference();
        let roi = roi_percent(data.total_net_profit(), data.total_capital());
        assert_eq!(roi.to_string(), "9.89%");
        let payback = payback_periods(data.total_capital(), data.total_net_profit()).unwrap();
        assert_eq!(format!("{payback:.1}"), "10.1");
        let margin = margin_percent(data.total_net_profit(), data.total_revenue());
        assert_eq!(margin.one_decimal(), "9.0%");
    }

    #[test]
    fn estimate_uses_sell_price_times_volume() {
        let lines = reference().operations();
        let batu = estimate_price(lines, Some("Batu Split"), "10").unwrap();
        assert_eq!(batu.total, 2_400_000.0);
        assert_eq!(batu.unit_price, 240_000.0);
        let pasir = estimate_price(lines, Some("Pasir"), "5").unwrap();
        assert_eq!(pasir.total, 1_300_000.0);
    }

    #[test]
    fn estimate_is_linear_in_volume() {
        let lines = reference().operations();
        for volume in [0.5, 1.0, 7.25, 120.0] {
            let single = estimate_price(lines, Some("Pasir"), &volume.to_string()).unwrap();
            let double = estimate_price(lines, Some("Pasir"), &(2.0 * volume).to_string()).unwrap();
            assert!(close(double.total, 2.0 * single.total));
        }
    }

    #[test]
    fn estimate_rejects_missing_input() {
        let lines = reference().operations();
        assert_eq!(
            estimate_price(lines, None, "10"),
            Err(CalculatorError::InputIncomplete {
                field: CalculatorField::Material
            })
        );
        assert_eq!(
            estimate_price(lines, Some(""), "10"),
            Err(CalculatorError::InputIncomplete {
                field: CalculatorField::Material
            })
        );
        assert_eq!(
            estimate_price(lines, Some("Pasir"), "  "),
            Err(CalculatorError::InputIncomplete {
                field: CalculatorField::Volume
            })
        );
    }

    #[test]
    fn estimate_rejects_unknown_material() {
        let err = estimate_price(reference().operations(), Some("Semen"), "3").unwrap_err();
        assert_eq!(err, CalculatorError::MaterialNotFound("Semen".to_string()));
        assert_eq!(err.to_string(), "Material tidak ditemukan: Semen");
    }

    #[test]
    fn malformed_volume_counts_as_incomplete() {
        for input in ["abc", "-5", "0", "NaN", "inf", "1e999", "1.2.3"] {
            assert_eq!(
                parse_volume(input),
                Err(CalculatorError::InputIncomplete {
                    field: CalculatorField::Volume
                }),
                "input {input:?}"
            );
        }
        assert_eq!(parse_volume(" 12,5 "), Ok(12.5));
        assert_eq!(parse_volume("3"), Ok(3.0));

        // Parses as finite but the total overflows.
        assert_eq!(
            estimate_price(reference().operations(), Some("Pasir"), "1e304"),
            Err(CalculatorError::InputIncomplete {
                field: CalculatorField::Volume
            })
        );
    }
}
