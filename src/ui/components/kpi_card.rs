use dioxus::prelude::*;

use crate::ui::theme::{self, Accent};

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, accent: Accent) -> Element {
    rsx! {
        div {
            class: "{theme::kpi_card(accent)}",
            h3 { class: "mb-2 text-lg font-semibold", "{title}" }
            p { class: "text-3xl font-bold", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-sm opacity-90", "{desc}" }
            }
        }
    }
}
