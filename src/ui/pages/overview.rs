use std::time::Duration;

use dioxus::{document, prelude::*};
use tokio::time::sleep;

use crate::{
    domain::{dataset, DashboardReport},
    ui::{
        components::{
            chart::{BarChart, ChartSeries},
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme::{self, Accent},
    },
    util::format::format_currency,
};

#[component]
pub fn OverviewPage() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let data = dataset::reference();
    let report = DashboardReport::from_dataset(data);

    let categories: Vec<String> = data.overview().iter().map(|m| m.category.clone()).collect();
    let series = vec![ChartSeries {
        name: "Nilai".to_string(),
        color: theme::OVERVIEW_BAR,
        values: data.overview().iter().map(|m| m.value).collect(),
    }];

    let mut copied = use_signal(|| None::<&'static str>);
    let summary_text = report.summary_text();
    let json_export = report.to_json();

    let on_copy_summary = move |_| {
        if copy_text_to_clipboard(&summary_text) {
            push_toast(toasts, ToastKind::Success, "Ringkasan disalin ke clipboard.");
            copied.set(Some("summary"));
            spawn(async move {
                sleep(Duration::from_secs(2)).await;
                copied.set(None);
            });
        }
    };

    let on_copy_json = move |_| match &json_export {
        Ok(json) => {
            if copy_text_to_clipboard(json) {
                push_toast(toasts, ToastKind::Success, "JSON disalin ke clipboard.");
                copied.set(Some("json"));
                spawn(async move {
                    sleep(Duration::from_secs(2)).await;
                    copied.set(None);
                });
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to serialise dashboard report");
            push_toast(toasts, ToastKind::Error, format!("Gagal membuat JSON: {err}"));
        }
    };

    rsx! {
        div { class: "grid grid-cols-1 gap-8 lg:grid-cols-2",
            div { class: "grid grid-cols-1 gap-6 md:grid-cols-3 lg:col-span-2",
                KpiCard {
                    title: "Total Modal",
                    value: format_currency(report.total_capital),
                    accent: Accent::Blue,
                }
                KpiCard {
                    title: "Total Pemasukan",
                    value: format_currency(report.total_revenue),
                    accent: Accent::Green,
                }
                KpiCard {
                    title: "Keuntungan Bersih",
                    value: format_currency(report.net_profit),
                    description: format!("Margin: {}", report.margin.one_decimal()),
                    accent: Accent::Purple,
                }
            }

            div { class: "{theme::PANEL}",
                h3 { class: "{theme::PANEL_TITLE}", "Ringkasan Keuangan" }
                BarChart { categories, series }
            }

            div { class: "{theme::PANEL}",
                h3 { class: "{theme::PANEL_TITLE}", "Return on Investment (ROI)" }
                div { class: "space-y-4",
                    div { class: "{theme::DETAIL_ROW}",
                        span { class: "font-medium", "ROI Percentage" }
                        span { class: "text-2xl font-bold text-green-600", "{report.roi}" }
                    }
                    div { class: "{theme::DETAIL_ROW}",
                        span { class: "font-medium", "Payback Period" }
                        span { class: "text-lg font-semibold", "{report.payback_label()}" }
                    }
                    div { class: "mt-4 {theme::MUTED_TEXT}",
                        p { "• ROI = (Keuntungan Bersih / Total Modal) × 100%" }
                        p { "• {report.roi_formula()}" }
                    }
                }
                div { class: "mt-6 flex justify-end gap-2",
                    button {
                        class: "{theme::BTN_OUTLINE}",
                        onclick: on_copy_summary,
                        if copied() == Some("summary") { "Tersalin!" } else { "Salin Ringkasan" }
                    }
                    button {
                        class: "{theme::BTN_OUTLINE}",
                        onclick: on_copy_json,
                        if copied() == Some("json") { "Tersalin!" } else { "Salin JSON" }
                    }
                }
            }
        }
    }
}

fn copy_text_to_clipboard(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let payload = match serde_json::to_string(text) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(error = %err, "failed to encode clipboard payload");
            return false;
        }
    };
    let script = format!(
        r#"(async () => {{
            const data = {payload};
            try {{
                if (navigator.clipboard && navigator.clipboard.writeText) {{
                    await navigator.clipboard.writeText(data);
                    return true;
                }}
            }} catch (_err) {{}}
            const area = document.createElement('textarea');
            area.value = data;
            area.style.position = 'fixed';
            area.style.opacity = '0';
            document.body.appendChild(area);
            area.select();
            const ok = document.execCommand('copy');
            document.body.removeChild(area);
            return ok;
        }})()"#
    );
    let eval = document::eval(&script);
    spawn(async move {
        if let Err(err) = eval.await {
            tracing::debug!(?err, "clipboard script failed");
        }
    });
    true
}
