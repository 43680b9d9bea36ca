use dioxus::prelude::*;

use crate::shared::types::ViewState;
use crate::utils::format::format_bytes;

#[allow(non_snake_case)]
#[component]
pub fn SizeChart() -> Element {
    let view = use_context::<Signal<ViewState>>();
    let points = view.read().dashboard.daily_sizes.clone();
    // Hovered bar index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);
    // Visual params
    let height = 180.0f32;
    let padding = 20.0f32;
    let bar_w = 48.0f32;
    let bar_gap = 16.0f32;
    let n = points.len().max(1) as f32;
    let width = (n * (bar_w + bar_gap) + padding * 2.0).ceil();
    let max_size = points
        .iter()
        .map(|p| p.size_bytes)
        .fold(0.0f64, f64::max)
        .max(0.0) as f32;
    let view_box = format!("0 0 {} {}", width, height + padding * 2.0);

    rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-3",
            div { class: "flex items-end justify-between",
                h2 { class: "text-lg font-medium text-slate-200", "Backup Sizes" }
                if max_size > 0.0 { div { class: "text-xs text-slate-400", "Peak: {format_bytes(max_size as f64)}" } }
            }
            div { class: "w-full overflow-x-auto",
                svg { class: "block min-w-full", view_box: "{view_box}", width: "100%", height: "{(height + padding*2.0).to_string()}",
                    line { x1: "{padding}", y1: "{padding + height}", x2: "{width - padding}", y2: "{padding + height}", stroke: "#1f2937", stroke_width: "1" }
                    {
                        points.iter().enumerate().map(|(i, p)| {
                            let x = padding + (i as f32) * (bar_w + bar_gap);
                            let h = if max_size <= 0.0 { 0.0 } else { (p.size_bytes as f32) / max_size * height };
                            let y = padding + (height - h);
                            let cls = if p.size_bytes == 0.0 { "text-slate-800" } else { "text-emerald-400/80" };
                            rsx!{ rect {
                                key: "{i}", class: "{cls}", x: "{x}", y: "{y}", width: "{bar_w}", height: "{h}", fill: "currentColor", rx: "2",
                                onmouseenter: move |_| *hovered.write() = Some(i),
                                onmouseleave: move |_| *hovered.write() = None,
                                ontouchstart: move |_| *hovered.write() = Some(i),
                                ontouchend: move |_| *hovered.write() = None,
                            }}
                        })
                    }
                    {
                        points.iter().enumerate().map(|(i, p)| {
                            let x = padding + (i as f32) * (bar_w + bar_gap) + bar_w / 2.0;
                            rsx!{ text { key: "label-{i}", x: "{x}", y: "{height + padding + 14.0}", text_anchor: "middle", class: "text-slate-400 fill-current text-[10px]", "{p.day}" } }
                        })
                    }
                    {
                        match *hovered.read() {
                            Some(i) => {
                                let p = &points[i];
                                let x = padding + (i as f32) * (bar_w + bar_gap) + bar_w / 2.0;
                                let h = if max_size <= 0.0 { 0.0 } else { (p.size_bytes as f32) / max_size * height };
                                let y = padding + (height - h);
                                let value_label = format_bytes(p.size_bytes);
                                let cw = 7.0f32; // approx char width at 11px
                                let content_w = (p.day.len().max(value_label.len()) as f32) * cw + 12.0;
                                let tip_w = content_w.max(12.0).min(width - padding * 2.0);
                                let tip_h = 36.0f32; // two lines
                                let tip_x = (x - tip_w / 2.0).clamp(padding, (width - padding) - tip_w);
                                let tip_y = (y - 10.0 - tip_h).max(6.0);
                                rsx!{ g { key: "tooltip",
                                    line { x1: "{x}", y1: "{y}", x2: "{x}", y2: "{tip_y + tip_h}", stroke: "#10b981", stroke_width: "1" }
                                    rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "6", fill: "#0f172a", stroke: "#334155", stroke_width: "1" }
                                    text { x: "{tip_x + 8.0}", y: "{tip_y + 16.0}", class: "fill-current text-[11px] text-slate-300", "{p.day}" }
                                    text { x: "{tip_x + 8.0}", y: "{tip_y + 30.0}", class: "fill-current text-[11px] text-slate-200", "{value_label}" }
                                }}
                            }
                            None => rsx!{ Fragment {} }
                        }
                    }
                }
            }
        }
    }
}
