use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Pre-formatted primary value
    #[prop(into)]
    value: Signal<String>,
    /// Visual variant: "success", "warning", "error" or default
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Change relative to previous period, in points
    #[prop(into, optional)]
    change: Signal<Option<f64>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let card_class = move || match variant.get().as_deref() {
        Some("success") => "stat-card stat-card--success",
        Some("warning") => "stat-card stat-card--warning",
        Some("error") => "stat-card stat-card--error",
        _ => "stat-card",
    };

    let change_view = move || {
        change.get().map(|delta| {
            let (arrow, cls) = if delta > 0.0 {
                ("\u{2191}", "stat-card__change stat-card__change--up")
            } else if delta < 0.0 {
                ("\u{2193}", "stat-card__change stat-card__change--down")
            } else {
                ("", "stat-card__change stat-card__change--flat")
            };
            let text = format!("{}{:.1}", arrow, delta.abs());
            view! { <span class=cls>{text}</span> }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {value}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}
