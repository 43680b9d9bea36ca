use dioxus::prelude::*;

use crate::shared::types::ViewState;
use crate::utils::format::{format_relative_ms, millis_since};

#[allow(non_snake_case)]
#[component]
pub fn BackupList() -> Element {
    let view = use_context::<Signal<ViewState>>();
    let backups = view.read().dashboard.backups.clone();

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

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-3",
            h2 { class: "text-lg font-medium text-slate-200", "Recent Backups" }
            if backups.is_empty() {
                p { class: "text-sm text-slate-400", "No backups yet." }
            } else {
                ul { class: "space-y-2",
                    {
                        backups.iter().enumerate().map(|(i, b)| {
                            let shown_time = if *hydrated.read() {
                                millis_since(&b.timestamp)
                                    .map(format_relative_ms)
                                    .unwrap_or_else(|| b.timestamp.clone())
                            } else {
                                b.timestamp.clone()
                            };
                            rsx! {
                                li { key: "{i}", class: "flex justify-between items-center",
                                    span { class: "text-slate-200", "{b.name}" }
                                    time { class: "text-sm text-slate-400", datetime: "{b.timestamp}", "{shown_time}" }
                                }
                            }
                        })
                    }
                }
            }
        }
    }
}
