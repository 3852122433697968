use dioxus::prelude::*;

use crate::domain::{DashboardState, Tab};
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let mut state = use_context::<Signal<DashboardState>>();
    let active = state.with(|s| s.active_tab);

    rsx! {
        div { class: "min-h-screen bg-gray-50 p-6",
            div { class: "mx-auto max-w-7xl",
                h1 { class: "mb-8 text-3xl font-bold text-gray-800", "{APP_NAME}" }

                nav { class: "mb-8 flex flex-wrap gap-1",
                    for tab in Tab::ALL {
                        TabButton {
                            tab,
                            active: tab == active,
                            onclick: move |selected: Tab| {
                                tracing::debug!(tab = selected.id(), "tab selected");
                                state.with_mut(|s| *s = s.select_tab(selected));
                            },
                        }
                    }
                }

                main { {children} }

                footer { class: "mt-10 text-center text-xs text-gray-500",
                    "{APP_NAME} · {version_label()}"
                }
            }
        }
    }
}

#[component]
fn TabButton(tab: Tab, active: bool, onclick: EventHandler<Tab>) -> Element {
    rsx! {
        button {
            id: "tab-{tab.id()}",
            class: "{theme::tab_button(active)}",
            onclick: move |_| onclick.call(tab),
            "{tab.label()}"
        }
    }
}
