use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus::logger::tracing::info;

use crate::components::ProgressBar;
use crate::shared::sim::BackupProgress;
use crate::shared::types::ViewState;

/// "Start Backup" button plus the live progress bar for the simulated run.
///
/// The driver owns a single pending timeout at any instant: each effect run
/// cancels the previous handle before arming the next tick, and `use_drop`
/// cancels whatever is still pending when the component unmounts.
#[allow(non_snake_case)]
#[component]
pub fn BackupControl() -> Element {
    let progress = use_context::<Signal<BackupProgress>>();

    #[cfg(feature = "web")]
    {
        use gloo_timers::callback::Timeout;

        use crate::shared::sim::TICK_MS;

        // Keep the handle so we can cancel it on re-runs/unmount
        let timer_handle: Signal<Option<Timeout>> = use_signal(|| None);

        // teardown on unmount
        use_drop({
            let mut timer_handle = timer_handle.clone();
            move || {
                if let Some(h) = timer_handle.write().take() {
                    h.cancel();
                }
            }
        });

        // Re-arm one tick while the run is live; each write to `progress`
        // re-runs this effect, so ticks stay strictly sequential.
        use_effect({
            let mut view = use_context::<Signal<ViewState>>();
            let mut progress = progress.clone();
            let mut timer_handle = timer_handle.clone();

            move || {
                let running = progress.read().running;

                // Cancel any previous timeout before scheduling a new one
                if let Some(prev) = timer_handle.write().take() {
                    prev.cancel();
                }
                if !running {
                    return;
                }

                let handle = Timeout::new(TICK_MS, move || {
                    let mut p = *progress.peek();
                    if p.tick() {
                        let next = view.peek().apply_backup_tick();
                        view.set(next);
                    }
                    if !p.running {
                        info!("[backup_control] simulated run complete");
                    }
                    progress.set(p);
                });
                timer_handle.set(Some(handle));
            }
        });
    }

    let p = *progress.read();

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-4",
            div { class: "flex items-center justify-between",
                h2 { class: "text-lg font-medium text-slate-200", "Manual Backup" }
                button {
                    class: "px-4 py-2 rounded-lg text-sm font-medium bg-emerald-500 text-slate-950 hover:bg-emerald-400 disabled:bg-slate-700 disabled:text-slate-400",
                    disabled: p.running,
                    onclick: {
                        let mut progress = progress.clone();
                        move |_| {
                            let mut next = *progress.peek();
                            if next.start() {
                                progress.set(next);
                            }
                        }
                    },
                    if p.running { "Backing up..." } else { "Start Backup" }
                }
            }
            if p.running || p.percent > 0 {
                div { class: "space-y-1",
                    ProgressBar {
                        value: p.percent as f32,
                        track_class: "bg-slate-800".to_string(),
                        progress_class: "bg-emerald-400".to_string(),
                    }
                    div { class: "text-xs text-slate-400 tabular-nums", "{p.percent}%" }
                }
            }
        }
    }
}
