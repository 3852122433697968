use dioxus::prelude::*;

use crate::{
    domain::{dataset, ProfitShare},
    ui::{
        components::chart::{PieChart, PieDatum},
        theme,
    },
    util::format::{format_currency, format_number},
};

fn pie_data(shares: &[ProfitShare]) -> Vec<PieDatum> {
    shares
        .iter()
        .map(|share| PieDatum {
            name: share.party.clone(),
            label: format!("{} ({}%)", share.party, format_number(share.percentage)),
            value: share.amount,
        })
        .collect()
}

#[component]
pub fn ProfitSharingPage() -> Element {
    let data = dataset::reference();
    let shares = data.profit_shares();
    let chart = pie_data(shares);
    let details: Vec<(ProfitShare, &'static str)> = shares
        .iter()
        .enumerate()
        .map(|(index, share)| (share.clone(), theme::palette_color(index)))
        .collect();

    rsx! {
        div { class: "grid grid-cols-1 gap-8 lg:grid-cols-2",
            div { class: "{theme::PANEL}",
                h3 { class: "{theme::PANEL_TITLE}", "Pembagian Keuntungan" }
                PieChart { data: chart }
            }

            div { class: "{theme::PANEL}",
                h3 { class: "{theme::PANEL_TITLE}", "Detail Bagi Hasil" }
                div { class: "space-y-4",
                    div { class: "rounded-lg bg-gray-50 p-4",
                        p { class: "mb-1 text-sm text-gray-600", "Keuntungan Bersih Total" }
                        p { class: "text-2xl font-bold", "{format_currency(data.total_net_profit())}" }
                    }
                    for (share, color) in details {
                        div { class: "{theme::BORDERED_CARD}",
                            div { class: "flex items-center justify-between",
                                div {
                                    h4 { class: "font-semibold", "{share.party}" }
                                    p { class: "{theme::MUTED_TEXT}",
                                        "{format_number(share.percentage)}% dari keuntungan"
                                    }
                                }
                                p {
                                    class: "text-right text-xl font-bold",
                                    style: "color: {color}",
                                    "{format_currency(share.amount)}"
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
    fn slice_labels_show_party_and_percentage() {
        let data = pie_data(dataset::reference().profit_shares());
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].label, "Investor (50%)");
        assert_eq!(data[1].label, "Pelaksana (50%)");
        assert_eq!(data[1].value, 39_375_000.0);
    }
}
