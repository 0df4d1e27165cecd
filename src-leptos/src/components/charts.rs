//! Hand-rendered dashboard charts.
//!
//! Stacked weekly growth bars (CSS heights) and the doctor status donut
//! (SVG stroke arcs). Both read plain data snapshots so they re-render
//! whenever the backing signal changes.

use amwell_types::WeeklyPoint;
use leptos::prelude::*;

/// Weekly user/doctor signups as stacked bars.
#[component]
pub fn GrowthBarChart(#[prop(into)] weeks: Signal<Vec<WeeklyPoint>>) -> impl IntoView {
    view! {
        <div class="chart chart--bars">
            <div class="chart-legend">
                <span class="chart-legend__item chart-legend__item--users">"Users"</span>
                <span class="chart-legend__item chart-legend__item--doctors">"Doctors"</span>
            </div>
            <div class="chart-bars">
                {move || {
                    let weeks = weeks.get();
                    let max = weeks
                        .iter()
                        .map(|week| week.users + week.doctors)
                        .max()
                        .unwrap_or(0)
                        .max(1);

                    weeks
                        .into_iter()
                        .map(|week| {
                            let users_pct = week.users as f64 / max as f64 * 100.0;
                            let doctors_pct = week.doctors as f64 / max as f64 * 100.0;
                            view! {
                                <div class="chart-bar">
                                    <div class="chart-bar__stack">
                                        <div
                                            class="chart-bar__segment chart-bar__segment--doctors"
                                            style=format!("height: {:.1}%", doctors_pct)
                                            title=format!("{} doctors", week.doctors)
                                        ></div>
                                        <div
                                            class="chart-bar__segment chart-bar__segment--users"
                                            style=format!("height: {:.1}%", users_pct)
                                            title=format!("{} users", week.users)
                                        ></div>
                                    </div>
                                    <span class="chart-bar__label">{week.label}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

const DONUT_RADIUS: f64 = 45.0;

/// Approved/pending/rejected doctor counts as a donut.
#[component]
pub fn DoctorStatusChart(
    #[prop(into)] breakdown: Signal<[(&'static str, u64); 3]>,
) -> impl IntoView {
    view! {
        <div class="chart chart--donut">
            {move || {
                let segments = breakdown.get();
                let total: u64 = segments.iter().map(|(_, count)| count).sum();
                let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;

                let mut offset = 0.0;
                let arcs = segments
                    .iter()
                    .map(|(label, count)| {
                        let fraction = if total == 0 {
                            0.0
                        } else {
                            *count as f64 / total as f64
                        };
                        let length = fraction * circumference;
                        let dash = format!("{:.2} {:.2}", length, circumference - length);
                        let dash_offset = format!("{:.2}", -offset);
                        offset += length;
                        let class = format!(
                            "chart-donut__segment chart-donut__segment--{}",
                            label.to_lowercase()
                        );
                        view! {
                            <circle
                                class=class
                                cx="60"
                                cy="60"
                                r=DONUT_RADIUS.to_string()
                                fill="none"
                                stroke-width="14"
                                stroke-dasharray=dash
                                stroke-dashoffset=dash_offset
                            />
                        }
                    })
                    .collect_view();

                view! {
                    <svg viewBox="0 0 120 120" class="chart-donut__svg">
                        {arcs}
                        <text x="60" y="66" text-anchor="middle" class="chart-donut__total">
                            {total.to_string()}
                        </text>
                    </svg>
                    <ul class="chart-donut__legend">
                        {segments
                            .iter()
                            .map(|(label, count)| {
                                view! {
                                    <li class=format!(
                                        "chart-legend__item chart-legend__item--{}",
                                        label.to_lowercase()
                                    )>
                                        {format!("{}: {}", label, count)}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
            }}
        </div>
    }
}
