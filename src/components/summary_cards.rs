use dioxus::prelude::*;

use crate::shared::types::ViewState;
use crate::utils::format::format_local;

#[allow(non_snake_case)]
#[component]
pub fn SummaryCards() -> Element {
    let view = use_context::<Signal<ViewState>>();
    let v = view.read();
    let total = v.dashboard.backups.len();
    let last = v.dashboard.last_backup.clone();

    // Force one rerender after hydration so client formatting can apply
    let hydrated = use_signal(|| false);
    #[cfg(feature = "web")]
    {
        use_effect({
            let mut hydrated = hydrated.clone();
            move || {
                hydrated.set(true);
            }
        });
    }

    let last_label = match &last {
        Some(ts) if *hydrated.read() => format_local(ts),
        Some(ts) => ts.clone(),
        None => "never".to_string(),
    };

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-2",
            h3 { class: "text-sm font-medium text-slate-400", "Total Backups" }
            div { class: "text-2xl font-bold text-slate-100 tabular-nums", "{total}" }
        }
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-2",
            h3 { class: "text-sm font-medium text-slate-400", "Last Backup" }
            if let Some(ts) = last {
                time { class: "text-2xl font-bold text-slate-100", datetime: "{ts}", "{last_label}" }
            } else {
                div { class: "text-2xl font-bold text-slate-500", "{last_label}" }
            }
        }
    }
}
