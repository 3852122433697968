use dioxus::prelude::*;

use crate::{
    domain::{dataset, DashboardState, Tab},
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{
            OperationsPage, OverviewPage, PriceCalculatorPage, ProfitSharingPage,
            ProfitabilityPage,
        },
        shell::Shell,
    },
    util::assets,
};

#[component]
pub fn App() -> Element {
    let start_tab = try_use_context::<Tab>().unwrap_or_default();
    let state = use_signal(move || DashboardState::default().select_tab(start_tab));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    use_hook(|| {
        let data = dataset::reference();
        tracing::info!(
            materials = data.materials().len(),
            operations = data.operations().len(),
            shares = data.profit_shares().len(),
            "dataset loaded"
        );
        for issue in data.consistency_issues() {
            tracing::warn!(%issue, "dataset inconsistency");
        }
    });

    let active = state.with(|s| s.active_tab);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::tailwind_css()}" }
        document::Style { "{assets::main_css()}" }
        Shell {
            match active {
                Tab::Overview => rsx! { OverviewPage {} },
                Tab::Profitability => rsx! { ProfitabilityPage {} },
                Tab::Operations => rsx! { OperationsPage {} },
                Tab::ProfitSharing => rsx! { ProfitSharingPage {} },
                Tab::PriceCalculator => rsx! { PriceCalculatorPage {} },
            }
        }
        Toast {}
    }
}
