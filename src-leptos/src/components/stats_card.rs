//! Stats card component for dashboard

use leptos::prelude::*;

#[component]
pub fn StatsCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] icon: String,
    #[prop(optional, into)] color: String,
    /// Growth delta line, e.g. "▲ 12.5%"
    #[prop(optional)]
    trend: Option<Signal<String>>,
    /// Color class for the trend line (success/danger/neutral)
    #[prop(optional)]
    trend_class: Option<Signal<&'static str>>,
) -> impl IntoView {
    let color_class = if color.is_empty() { "blue".to_string() } else { color };

    view! {
        <div class=format!("stats-card stats-card--{}", color_class)>
            <div class="stats-card__icon">{icon}</div>
            <div class="stats-card__content">
                <div class="stats-card__value">{move || value.get()}</div>
                <div class="stats-card__title">{title}</div>
                {trend.map(|t| {
                    let class = move || {
                        let modifier = trend_class.map(|c| c.get()).unwrap_or("neutral");
                        format!("stats-card__trend stats-card__trend--{}", modifier)
                    };
                    view! {
                        <div class=class>{move || t.get()}</div>
                    }
                })}
            </div>
        </div>
    }
}
