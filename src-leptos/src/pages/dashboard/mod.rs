//! Dashboard page: growth analytics and quick approvals

pub(crate) mod pending;

use pending::PendingApprovalsSection;

use crate::app::AppState;
use crate::components::{DoctorStatusChart, GrowthBarChart, StatsCard, Topbar};
use crate::formatters::{format_currency, format_percent, percent_color};
use amwell_types::DashboardStats;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<AppState>();

    // Refetches whenever the month window changes, including on mount
    Effect::new(move |_| {
        let months = state.growth.months.get();
        state.growth.fetch(months);
    });

    state.doctors.fetch_pending();

    let stats =
        Memo::new(move |_| state.growth.data.get().map(|g| DashboardStats::from_growth(&g)));
    let card = move || stats.get().unwrap_or_default();

    let weekly = Signal::derive(move || {
        state.growth.data.get().map(|g| g.weekly_growth).unwrap_or_default()
    });
    let breakdown = Signal::derive(move || {
        state
            .growth
            .data
            .get()
            .map(|g| g.doctor_status_breakdown())
            .unwrap_or([("Approved", 0), ("Pending", 0), ("Rejected", 0)])
    });
    let has_weekly = Memo::new(move |_| {
        state.growth.data.get().map(|g| g.has_weekly_data()).unwrap_or(false)
    });

    let on_months_change = move |ev: web_sys::Event| {
        if let Some(select) =
            ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        {
            if let Ok(months) = select.value().parse::<u32>() {
                state.growth.months.set(months);
            }
        }
    };

    view! {
        <div class="page dashboard">
            <Topbar title="Dashboard" subtitle="Platform growth at a glance" />

            <div class="toolbar">
                <label for="months-window">"Window"</label>
                <select id="months-window" class="form-input" on:change=on_months_change>
                    <option value="3" selected=move || state.growth.months.get() == 3>"3 months"</option>
                    <option value="6" selected=move || state.growth.months.get() == 6>"6 months"</option>
                    <option value="12" selected=move || state.growth.months.get() == 12>"12 months"</option>
                </select>
            </div>

            <Show when=move || state.growth.error.get().is_some()>
                <div class="alert alert--error">
                    <span>{move || state.growth.error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=move || state.growth.loading.get() && state.growth.data.get().is_none()>
                <p class="loading">"Loading dashboard..."</p>
            </Show>

            <Show when=move || state.growth.data.get().is_some()>
                <section class="stats-grid stats-grid--4">
                    <StatsCard
                        title="Total Users".to_string()
                        value=Signal::derive(move || card().total_users.to_string())
                        icon="👥".to_string()
                        color="blue".to_string()
                        trend=Signal::derive(move || format_percent(card().user_growth))
                        trend_class=Signal::derive(move || percent_color(card().user_growth))
                    />
                    <StatsCard
                        title="Active Doctors".to_string()
                        value=Signal::derive(move || card().active_doctors.to_string())
                        icon="🩺".to_string()
                        color="green".to_string()
                        trend=Signal::derive(move || format_percent(card().doctor_growth))
                        trend_class=Signal::derive(move || percent_color(card().doctor_growth))
                    />
                    <StatsCard
                        title="Pending Approvals".to_string()
                        value=Signal::derive(move || card().pending_approvals.to_string())
                        icon="⏳".to_string()
                        color="orange".to_string()
                        trend=Signal::derive(move || format_percent(card().pending_growth))
                        trend_class=Signal::derive(move || percent_color(card().pending_growth))
                    />
                    <StatsCard
                        title="Monthly Revenue".to_string()
                        value=Signal::derive(move || format_currency(card().monthly_revenue))
                        icon="💰".to_string()
                        color="purple".to_string()
                        trend=Signal::derive(move || format_percent(card().revenue_growth))
                        trend_class=Signal::derive(move || percent_color(card().revenue_growth))
                    />
                </section>

                <div class="dashboard-columns">
                    <section class="card">
                        <h2>"Weekly growth"</h2>
                        <Show
                            when=move || has_weekly.get()
                            fallback=|| view! { <p class="empty">"No signups in this window"</p> }
                        >
                            <GrowthBarChart weeks=weekly />
                        </Show>
                    </section>
                    <section class="card">
                        <h2>"Doctor status"</h2>
                        <DoctorStatusChart breakdown=breakdown />
                    </section>
                </div>
            </Show>

            <PendingApprovalsSection />
        </div>
    }
}
