use dioxus::prelude::*;

use crate::{
    domain::{dataset, DashboardReport},
    ui::{
        components::chart::{BarChart, ChartSeries},
        theme,
    },
    util::format::format_currency,
};

#[component]
pub fn ProfitabilityPage() -> Element {
    let data = dataset::reference();
    let report = DashboardReport::from_dataset(data);
    let materials = data.materials();

    let categories: Vec<String> = materials.iter().map(|m| m.name.clone()).collect();
    let series = vec![
        ChartSeries {
            name: "Modal".to_string(),
            color: theme::CAPITAL_BAR,
            values: materials.iter().map(|m| m.capital).collect(),
        },
        ChartSeries {
            name: "Pemasukan".to_string(),
            color: theme::REVENUE_BAR,
            values: materials.iter().map(|m| m.revenue).collect(),
        },
        ChartSeries {
            name: "Keuntungan".to_string(),
            color: theme::PROFIT_BAR,
            values: materials.iter().map(|m| m.profit).collect(),
        },
    ];

    rsx! {
        div { class: "grid grid-cols-1 gap-8 lg:grid-cols-2",
            div { class: "{theme::PANEL}",
                h3 { class: "{theme::PANEL_TITLE}", "Analisis Keuntungan per Material" }
                BarChart { categories, series, show_legend: true }
            }

            div { class: "{theme::PANEL}",
                h3 { class: "{theme::PANEL_TITLE}", "Margin Keuntungan" }
                div { class: "space-y-4",
                    for row in report.margins {
                        div { class: "{theme::BORDERED_CARD}",
                            div { class: "mb-2 flex items-center justify-between",
                                span { class: "font-medium", "{row.material}" }
                                span { class: "{theme::percentage_text(row.margin)}", "{row.margin}" }
                            }
                            div { class: "{theme::MUTED_TEXT}",
                                p { "Modal: {format_currency(row.capital)}" }
                                p { "Pemasukan: {format_currency(row.revenue)}" }
                                p { "Keuntungan: {format_currency(row.profit)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
