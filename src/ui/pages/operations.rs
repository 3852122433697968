use dioxus::prelude::*;

use crate::{
    domain::{dataset, DashboardReport, OperationalLine},
    ui::theme,
    util::format::{format_currency, format_number},
};

#[derive(Clone, PartialEq)]
struct OperationRow {
    material: String,
    trucks: String,
    volume_per_truck: String,
    fleet_volume: String,
    buy_price: String,
    sell_price: String,
}

impl From<&OperationalLine> for OperationRow {
    fn from(line: &OperationalLine) -> Self {
        Self {
            material: line.material.clone(),
            trucks: format_number(line.truck_count as f64),
            volume_per_truck: format_number(line.unit_volume_per_truck),
            fleet_volume: format_number(line.fleet_volume()),
            buy_price: format_currency(line.buy_price),
            sell_price: format_currency(line.sell_price),
        }
    }
}

#[component]
pub fn OperationsPage() -> Element {
    let data = dataset::reference();
    let report = DashboardReport::from_dataset(data);
    let rows: Vec<OperationRow> = data.operations().iter().map(OperationRow::from).collect();

    rsx! {
        div { class: "grid grid-cols-1 gap-8 lg:grid-cols-2",
            div { class: "{theme::PANEL}",
                h3 { class: "{theme::PANEL_TITLE}", "Data Operasional" }
                div { class: "overflow-x-auto",
                    table { class: "w-full text-sm",
                        thead {
                            tr { class: "border-b",
                                th { class: "p-2 text-left", "Material" }
                                th { class: "p-2 text-right", "Truck" }
                                th { class: "p-2 text-right", "Kubik/Truck" }
                                th { class: "p-2 text-right", "Kubik/Trip" }
                                th { class: "p-2 text-right", "Harga Beli" }
                                th { class: "p-2 text-right", "Harga Jual" }
                            }
                        }
                        tbody {
                            for row in rows {
                                tr { class: "border-b",
                                    td { class: "p-2 font-medium", "{row.material}" }
                                    td { class: "p-2 text-right", "{row.trucks}" }
                                    td { class: "p-2 text-right", "{row.volume_per_truck}" }
                                    td { class: "p-2 text-right", "{row.fleet_volume}" }
                                    td { class: "p-2 text-right", "{row.buy_price}" }
                                    td { class: "p-2 text-right", "{row.sell_price}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "{theme::PANEL}",
                h3 { class: "{theme::PANEL_TITLE}", "Efisiensi Harga" }
                div { class: "space-y-4",
                    for markup in report.markups {
                        div { class: "{theme::BORDERED_CARD}",
                            h4 { class: "mb-2 font-semibold", "{markup.material}" }
                            div { class: "grid grid-cols-2 gap-4 text-sm",
                                div {
                                    p { class: "text-gray-600", "Markup per kubik:" }
                                    p { class: "font-bold", "{format_currency(markup.markup_per_unit)}" }
                                }
                                div {
                                    p { class: "text-gray-600", "Markup %:" }
                                    p { class: "{theme::percentage_text(markup.markup)}", "{markup.markup}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_rows_render_grouped_values() {
        let line = dataset::reference().operation("Batu Split").unwrap();
        let row = OperationRow::from(line);
        assert_eq!(row.trucks, "10");
        assert_eq!(row.fleet_volume, "250");
        assert_eq!(row.buy_price, "Rp\u{a0}220.000");
        assert_eq!(row.sell_price, "Rp\u{a0}240.000");
    }
}
