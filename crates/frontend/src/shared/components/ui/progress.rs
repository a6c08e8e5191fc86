use leptos::prelude::*;

/// Horizontal progress bar, clamped to 0..=100.
#[component]
pub fn ProgressBar(
    /// Progress in percent
    #[prop(into)]
    percent: Signal<u32>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let width_style = move || format!("width: {}%", percent.get().min(100));
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("progress {}", additional_class())>
            <div class="progress__fill" style=width_style></div>
        </div>
    }
}
