use dioxus::prelude::*;

use crate::{
    domain::{dataset, CalculatorPhase, DashboardState},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::format::{format_currency, format_number},
};

#[component]
pub fn PriceCalculatorPage() -> Element {
    let mut state = use_context::<Signal<DashboardState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let data = dataset::reference();
    let material_names = data.material_names();
    let calculator = state.with(|s| s.calculator.clone());
    let selected = calculator.material.clone().unwrap_or_default();
    let volume = calculator.volume_input.clone();
    let phase = calculator.phase();
    let unit_price_hint = data
        .operation(&selected)
        .map(|line| format!("Harga jual: {} / kubik", format_currency(line.sell_price)));

    let on_calculate = move |_| {
        let current = state();
        match current.calculate(data.operations()) {
            Ok(next) => {
                if let Some(result) = &next.calculator.result {
                    tracing::info!(
                        material = %result.material,
                        volume = result.volume,
                        total = result.total,
                        "price estimate computed"
                    );
                }
                state.set(next);
            }
            Err(err) => {
                tracing::debug!(error = %err, "price estimate rejected");
                push_toast(toasts, ToastKind::Error, err.to_string());
            }
        }
    };

    rsx! {
        div { class: "{theme::PANEL}",
            h3 { class: "{theme::PANEL_TITLE}", "Kalkulator Harga Material" }
            div { class: "grid grid-cols-1 gap-6 md:grid-cols-2",
                div {
                    label { r#for: "materialType", class: "{theme::LABEL}", "Jenis Material" }
                    select {
                        id: "materialType",
                        name: "material",
                        class: "{theme::INPUT}",
                        value: "{selected}",
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            state.with_mut(|s| *s = s.with_material(Some(value)));
                        },
                        option { value: "", selected: selected.is_empty(), "Pilih Material" }
                        for name in material_names {
                            option {
                                value: "{name}",
                                selected: name == selected,
                                "{name}"
                            }
                        }
                    }
                    if let Some(hint) = unit_price_hint {
                        p { class: "mt-1 text-xs text-gray-500", "{hint}" }
                    }
                }
                div {
                    label { r#for: "volume", class: "{theme::LABEL}", "Volume (Kubik)" }
                    input {
                        r#type: "number",
                        id: "volume",
                        name: "volume",
                        min: "0",
                        step: "any",
                        class: "{theme::INPUT}",
                        placeholder: "Masukkan volume",
                        value: "{volume}",
                        oninput: move |evt: FormEvent| {
                            let value = evt.value();
                            state.with_mut(|s| *s = s.with_volume_input(value));
                        },
                    }
                }
            }
            button {
                class: "{theme::BTN_PRIMARY}",
                onclick: on_calculate,
                "Hitung Harga"
            }

            if let Some(result) = calculator.result {
                div { class: "mt-8 rounded-lg border border-blue-200 bg-blue-50 p-6",
                    h4 { class: "mb-3 text-lg font-semibold text-blue-800", "Estimasi Harga:" }
                    p { class: "text-3xl font-bold text-blue-900", "{format_currency(result.total)}" }
                    p { class: "mt-2 text-sm text-gray-600",
                        "{result.material} · {format_number(result.volume)} kubik × {format_currency(result.unit_price)}"
                    }
                    p { class: "mt-2 text-sm text-gray-600",
                        "*Estimasi ini berdasarkan harga jual per kubik material."
                    }
                    if phase == CalculatorPhase::Stale {
                        p { class: "mt-2 text-sm font-medium text-amber-700",
                            "Input telah berubah. Klik \"Hitung Harga\" untuk memperbarui estimasi."
                        }
                    }
                }
            }
        }
    }
}
