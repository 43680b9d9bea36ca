use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn ProgressBar(
    value: f32,
    track_class: String,
    progress_class: String,
) -> Element {
    // Normalize & clamp
    let val = value.clamp(0.0, 100.0);
    let fill_style = format!("width:{val:.2}%");

    rsx! {
        div { class: "w-full h-2 rounded-full overflow-hidden {track_class}",
            div { class: "h-full rounded-full transition-all {progress_class}", style: "{fill_style}" }
        }
    }
}
