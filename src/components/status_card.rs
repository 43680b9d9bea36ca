use dioxus::prelude::*;

use crate::shared::types::{Health, ViewState};

#[allow(non_snake_case)]
#[component]
pub fn StatusCard() -> Element {
    let view = use_context::<Signal<ViewState>>();
    let health = view.read().health;

    let (value_class, note) = match health {
        Health::Unknown => ("text-slate-400", "Contacting backend..."),
        Health::Healthy => ("text-emerald-400", "All systems operational"),
        Health::Unhealthy => ("text-red-400", "Backend unreachable"),
    };

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-2",
            h3 { class: "text-sm font-medium text-slate-400", "System Status" }
            div { class: "text-2xl font-bold {value_class}", "{health.label()}" }
            p { class: "text-xs text-slate-400", "{note}" }
        }
    }
}
