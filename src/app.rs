use dioxus::prelude::*;

use crate::api::{check_health, get_dashboard};
use crate::components::{
    BackupControl, BackupList, SizeChart, StatusCard, StorageCard, SummaryCards,
};
use crate::shared::sim::BackupProgress;
use crate::shared::types::{Health, ViewState};
use crate::TAILWIND_CSS;

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    let mut view = use_context_provider(|| Signal::new(ViewState::new()));
    use_context_provider(|| Signal::new(BackupProgress::new()));

    // ssr data (server waits)
    let dashboard = use_server_future(get_dashboard)?;
    use_effect(move || {
        if let Some(Ok(d)) = dashboard.read().as_ref() {
            let next = view.peek().with_dashboard(d.clone());
            view.set(next);
        }
    });

    // One-shot health refresh on mount; a failed call degrades the indicator
    // and nothing else.
    let health = use_resource(|| async move { check_health().await.unwrap_or(Health::Unhealthy) });
    use_effect(move || {
        if let Some(h) = *health.read() {
            let next = view.peek().with_health(h);
            view.set(next);
        }
    });

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        document::Meta { name: "color-scheme", content: "dark" }
        // Page container
        div { class: "min-h-screen bg-slate-950 text-slate-100",
            header { class: "border-b border-slate-800 bg-slate-900/60 backdrop-blur-sm",
                div { class: "max-w-5xl mx-auto py-4 px-6",
                    h1 { class: "text-2xl font-semibold tracking-tight text-slate-200", "Incrementify" }
                }
            }
            main { class: "max-w-5xl mx-auto p-6 space-y-6",
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                    StatusCard {}
                    StorageCard {}
                    SummaryCards {}
                }
                BackupControl {}
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                    BackupList {}
                    SizeChart {}
                }
            }
        }
    }
}
