//! Shared class strings and chart colours so pages stay visually consistent.

use crate::domain::Percentage;

// ============================================
// CHART COLOURS
// ============================================

/// Slice colours for pie charts; cycles when there are more slices.
pub const PIE_PALETTE: [&str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];

pub const OVERVIEW_BAR: &str = "#3B82F6";
pub const CAPITAL_BAR: &str = "#EF4444";
pub const REVENUE_BAR: &str = "#10B981";
pub const PROFIT_BAR: &str = "#8B5CF6";

pub fn palette_color(index: usize) -> &'static str {
    PIE_PALETTE[index % PIE_PALETTE.len()]
}

// ============================================
// CARDS
// ============================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
}

pub fn kpi_card(accent: Accent) -> &'static str {
    match accent {
        Accent::Blue => "rounded-xl p-6 text-white bg-gradient-blue",
        Accent::Green => "rounded-xl p-6 text-white bg-gradient-green",
        Accent::Purple => "rounded-xl p-6 text-white bg-gradient-purple",
    }
}

pub const PANEL: &str = "rounded-xl bg-white p-6 shadow-lg";
pub const PANEL_TITLE: &str = "mb-4 text-xl font-semibold";
pub const DETAIL_ROW: &str = "flex items-center justify-between rounded-lg bg-gray-50 p-4";
pub const BORDERED_CARD: &str = "rounded-lg border p-4";
pub const MUTED_TEXT: &str = "text-sm text-gray-600";
pub const POSITIVE_TEXT: &str = "font-bold text-green-600";
pub const NEGATIVE_TEXT: &str = "font-bold text-red-600";
pub const UNAVAILABLE_TEXT: &str = "font-bold text-gray-500";

/// Colour for a margin or markup figure: green when positive, red otherwise.
pub fn percentage_text(percentage: Percentage) -> &'static str {
    match percentage.value() {
        Some(value) if value > 0.0 => POSITIVE_TEXT,
        Some(_) => NEGATIVE_TEXT,
        None => UNAVAILABLE_TEXT,
    }
}

// ============================================
// NAVIGATION
// ============================================

pub fn tab_button(active: bool) -> &'static str {
    if active {
        "rounded-lg px-6 py-3 font-medium transition-colors bg-blue-600 text-white shadow-lg"
    } else {
        "rounded-lg px-6 py-3 font-medium transition-colors bg-white text-gray-600 shadow-sm hover:bg-gray-100"
    }
}

// ============================================
// FORMS
// ============================================

pub const LABEL: &str = "block text-sm font-medium text-gray-700";
pub const INPUT: &str = "mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-base focus:border-blue-500 focus:outline-none";
pub const BTN_PRIMARY: &str = "mt-6 w-full rounded-md bg-blue-600 px-4 py-3 font-semibold text-white hover:bg-blue-700";
pub const BTN_OUTLINE: &str = "rounded-md border border-gray-300 px-3 py-1 text-xs font-semibold uppercase tracking-wide text-gray-600 hover:border-blue-500 hover:text-blue-600";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_over_four_colours() {
        assert_eq!(palette_color(0), "#0088FE");
        assert_eq!(palette_color(3), "#FF8042");
        assert_eq!(palette_color(4), palette_color(0));
        assert_eq!(palette_color(9), palette_color(1));
    }

    #[test]
    fn percentage_colour_follows_sign() {
        assert_eq!(percentage_text(Percentage::Value(9.09)), POSITIVE_TEXT);
        assert_eq!(percentage_text(Percentage::Value(-4.0)), NEGATIVE_TEXT);
        assert_eq!(percentage_text(Percentage::Value(0.0)), NEGATIVE_TEXT);
        assert_eq!(percentage_text(Percentage::NotApplicable), UNAVAILABLE_TEXT);
    }
}
