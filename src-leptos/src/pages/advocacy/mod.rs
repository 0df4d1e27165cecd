//! Advocacy article pages: list, editor, analytics.

mod analytics;
mod editor;

pub use analytics::{AdvocacyAnalytics, ArticleStats};
pub use editor::ArticleEditor;

use crate::app::AppState;
use crate::components::{ConfirmDialog, Topbar};
use crate::formatters::{format_date, truncate};
use amwell_types::ArticleStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Advocacy() -> impl IntoView {
    let articles = expect_context::<AppState>().articles;
    let navigate = use_navigate();

    articles.fetch_all();

    // (id, title) of the article a delete is pending for
    let delete_confirm = RwSignal::new(Option::<(String, String)>::None);

    let on_create = move |_| navigate("/advocacy/create", Default::default());

    let on_delete = Callback::new(move |()| {
        let Some((id, _)) = delete_confirm.get_untracked() else {
            return;
        };
        delete_confirm.set(None);
        spawn_local(async move {
            if !articles.remove(&id).await {
                log::error!("Article delete failed");
            }
        });
    });

    view! {
        <div class="page advocacy">
            <Topbar title="Advocacy" subtitle="Health advocacy articles" />

            <div class="toolbar">
                <span class="list-count">
                    {move || format!("{} articles", articles.list.items.get().len())}
                </span>
                <a href="/advocacy/analytics" class="btn btn--secondary">"Analytics"</a>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New article"
                </button>
            </div>

            <Show when=move || articles.list.error.get().is_some()>
                <div class="alert alert--error">
                    <span>{move || articles.list.error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=move || articles.list.loading.get() && articles.list.items.get().is_empty()>
                <p class="loading">"Loading articles..."</p>
            </Show>

            <div class="article-list">
                <For
                    each=move || articles.list.items.get()
                    key=|article| article.id.clone()
                    children=move |article| {
                        let edit_href = format!("/advocacy/edit/{}", article.id);
                        let stats_href = format!("/advocacy/analytics/{}", article.id);
                        let confirm = (article.id.clone(), article.title.clone());
                        let views = article.analytics.as_ref().map(|a| a.views).unwrap_or(0);
                        let status_class = match article.status {
                            ArticleStatus::Published => "badge--success",
                            ArticleStatus::Draft => "badge--neutral",
                        };
                        view! {
                            <div class="card article-row">
                                <div class="article-row__body">
                                    <div class="article-row__title-line">
                                        <h3>{article.title.clone()}</h3>
                                        <span class=format!("badge {}", status_class)>
                                            {article.status.as_str()}
                                        </span>
                                        {article.featured.then(|| view! {
                                            <span class="badge badge--warning">"featured"</span>
                                        })}
                                    </div>
                                    <p class="article-row__excerpt">
                                        {article
                                            .excerpt
                                            .clone()
                                            .map(|e| truncate(&e, 140))
                                            .unwrap_or_default()}
                                    </p>
                                    <p class="article-row__meta">
                                        {format!(
                                            "{} · {} views · updated {}",
                                            article.category.clone().unwrap_or_else(|| "uncategorized".to_string()),
                                            views,
                                            article
                                                .updated_at
                                                .clone()
                                                .map(|d| format_date(&d))
                                                .unwrap_or_else(|| "—".to_string()),
                                        )}
                                    </p>
                                </div>
                                <div class="article-row__actions">
                                    <a class="btn btn--secondary btn--sm" href=edit_href>"Edit"</a>
                                    <a class="btn btn--ghost btn--sm" href=stats_href>"Stats"</a>
                                    <button
                                        class="btn btn--danger btn--sm"
                                        on:click=move |_| delete_confirm.set(Some(confirm.clone()))
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || !articles.list.loading.get() && articles.list.items.get().is_empty()>
                <p class="empty">"No articles yet"</p>
            </Show>

            <ConfirmDialog
                is_open=Signal::derive(move || delete_confirm.get().is_some())
                title="Delete article"
                message="The article and its analytics will be removed. Continue?"
                on_confirm=on_delete
                on_cancel=Callback::new(move |()| delete_confirm.set(None))
            />
        </div>
    }
}
