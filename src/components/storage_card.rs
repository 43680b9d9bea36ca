use dioxus::prelude::*;

use crate::components::ProgressBar;
use crate::shared::types::ViewState;
use crate::utils::format::format_bytes;

#[allow(non_snake_case)]
#[component]
pub fn StorageCard() -> Element {
    let view = use_context::<Signal<ViewState>>();
    let v = view.read();
    let used = v.dashboard.used_bytes;
    let max = v.dashboard.max_bytes as f64;
    let pct = if max > 0.0 {
        (used / max * 100.0) as f32
    } else {
        0.0
    };

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-2",
            h3 { class: "text-sm font-medium text-slate-400", "Storage Used" }
            div { class: "text-2xl font-bold text-slate-100 tabular-nums", "{format_bytes(used)}" }
            p { class: "text-xs text-slate-400", "of {format_bytes(max)}" }
            ProgressBar {
                value: pct,
                track_class: "bg-slate-800".to_string(),
                progress_class: "bg-emerald-400".to_string(),
            }
        }
    }
}
