//! Advocacy analytics pages: overview and per-article stats.

use crate::app::AppState;
use crate::components::{StatsCard, Topbar};
use amwell_types::ArticleAnalytics;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

#[component]
pub fn AdvocacyAnalytics() -> impl IntoView {
    let articles = expect_context::<AppState>().articles;

    articles.fetch_overview_stats();
    articles.fetch_all();

    let stats = move || articles.stats.get().unwrap_or_default();

    view! {
        <div class="page advocacy-analytics">
            <Topbar title="Advocacy analytics" subtitle="Reach across all articles" />
            <a href="/advocacy" class="back-link">"← Back to articles"</a>

            <section class="stats-grid stats-grid--4">
                <StatsCard
                    title="Articles".to_string()
                    value=Signal::derive(move || stats().total_articles.to_string())
                    icon="📰".to_string()
                    color="blue".to_string()
                />
                <StatsCard
                    title="Published".to_string()
                    value=Signal::derive(move || stats().published.to_string())
                    icon="✅".to_string()
                    color="green".to_string()
                />
                <StatsCard
                    title="Drafts".to_string()
                    value=Signal::derive(move || stats().drafts.to_string())
                    icon="📝".to_string()
                    color="orange".to_string()
                />
                <StatsCard
                    title="Total views".to_string()
                    value=Signal::derive(move || stats().total_views.to_string())
                    icon="👁️".to_string()
                    color="purple".to_string()
                />
            </section>

            <section class="card">
                <h2>"Per-article reach"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Status"</th>
                            <th>"Views"</th>
                            <th>"Likes"</th>
                            <th>"Shares"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || articles.list.items.get()
                            key=|article| article.id.clone()
                            children=move |article| {
                                let stats_href = format!("/advocacy/analytics/{}", article.id);
                                let analytics = article.analytics.clone().unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>{article.title.clone()}</td>
                                        <td>{article.status.as_str()}</td>
                                        <td>{analytics.views}</td>
                                        <td>{analytics.likes}</td>
                                        <td>{analytics.shares}</td>
                                        <td>
                                            <a class="btn btn--ghost btn--sm" href=stats_href>
                                                "Detail"
                                            </a>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>
        </div>
    }
}

#[component]
pub fn ArticleStats() -> impl IntoView {
    let articles = expect_context::<AppState>().articles;
    let params = use_params_map();

    let article_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let analytics = RwSignal::new(Option::<ArticleAnalytics>::None);
    let loading = RwSignal::new(true);

    if articles.list.items.get_untracked().is_empty() {
        articles.fetch_all();
    }

    Effect::new(move |_| {
        let id = article_id.get();
        if id.is_empty() {
            return;
        }
        loading.set(true);
        spawn_local(async move {
            analytics.set(articles.fetch_article_stats(&id).await);
            loading.set(false);
        });
    });

    let article_title = Memo::new(move |_| {
        let id = article_id.get();
        articles
            .list
            .items
            .get()
            .into_iter()
            .find(|article| article.id == id)
            .map(|article| article.title)
            .unwrap_or_else(|| "Article".to_string())
    });

    view! {
        <div class="page article-stats">
            <Topbar title="Article analytics" />
            <a href="/advocacy/analytics" class="back-link">"← Back to analytics"</a>

            <h2>{move || article_title.get()}</h2>

            <Show when=move || articles.list.error.get().is_some()>
                <div class="alert alert--error">
                    <span>{move || articles.list.error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || analytics.get().is_some()
                fallback=move || {
                    view! {
                        <p class="loading">
                            {move || if loading.get() { "Loading analytics..." } else { "No analytics available" }}
                        </p>
                    }
                }
            >
                {move || analytics.get().map(|stats| {
                    let (views, likes, shares, comments) =
                        (stats.views, stats.likes, stats.shares, stats.comments);
                    view! {
                    <section class="stats-grid stats-grid--4">
                        <StatsCard
                            title="Views".to_string()
                            value=Signal::derive(move || views.to_string())
                            icon="👁️".to_string()
                            color="blue".to_string()
                        />
                        <StatsCard
                            title="Likes".to_string()
                            value=Signal::derive(move || likes.to_string())
                            icon="❤️".to_string()
                            color="green".to_string()
                        />
                        <StatsCard
                            title="Shares".to_string()
                            value=Signal::derive(move || shares.to_string())
                            icon="🔗".to_string()
                            color="purple".to_string()
                        />
                        <StatsCard
                            title="Comments".to_string()
                            value=Signal::derive(move || comments.to_string())
                            icon="💬".to_string()
                            color="orange".to_string()
                        />
                    </section>

                    <section class="card">
                        <h3>"Traffic sources"</h3>
                        <Show
                            when={
                                let has_referrers = !stats.referrers.is_empty();
                                move || has_referrers
                            }
                            fallback=|| view! { <p class="empty">"No referrer data"</p> }
                        >
                            <ul class="referrer-list">
                                {stats.referrers.iter().map(|referrer| view! {
                                    <li>
                                        <span class="referrer-list__source">{referrer.source.clone()}</span>
                                        <span class="referrer-list__count">{referrer.count}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </Show>
                    </section>
                    }
                })}
            </Show>
        </div>
    }
}
