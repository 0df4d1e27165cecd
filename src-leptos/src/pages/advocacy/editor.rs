//! Article create/edit page with live HTML preview.

use crate::app::AppState;
use crate::components::{Button, Topbar};
use crate::stores::ArticleLookup;
use amwell_types::ArticleStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use wasm_bindgen::JsCast;
use web_sys::FormData;

/// Shared by `/advocacy/create` and `/advocacy/edit/:id`; the presence
/// of an `id` param decides which mode it runs in.
#[component]
pub fn ArticleEditor() -> impl IntoView {
    let articles = expect_context::<AppState>().articles;
    let params = use_params_map();
    let navigate = use_navigate();

    let article_id = Memo::new(move |_| params.read().get("id").filter(|id| !id.is_empty()));
    let is_edit = Memo::new(move |_| article_id.get().is_some());

    let title = RwSignal::new(String::new());
    let excerpt = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let partner = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let status = RwSignal::new(ArticleStatus::Draft);
    let featured = RwSignal::new(false);
    let content = RwSignal::new(String::new());
    let image_file = RwSignal::new_local(None::<web_sys::File>);

    let saving = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let saved = RwSignal::new(false);
    let loaded = RwSignal::new(false);
    let load_error = RwSignal::new(Option::<String>::None);

    // Edit mode initializes from the cached admin list
    if articles.list.items.get_untracked().is_empty() {
        articles.fetch_all();
    }

    Effect::new(move |_| {
        if loaded.get_untracked() || load_error.get_untracked().is_some() {
            return;
        }
        let Some(id) = article_id.get() else {
            loaded.set(true);
            return;
        };
        match articles.lookup(&id) {
            ArticleLookup::Found(article) => {
                title.set(article.title);
                excerpt.set(article.excerpt.unwrap_or_default());
                category.set(article.category.unwrap_or_default());
                partner.set(article.partner.unwrap_or_default());
                tags.set(article.tags.join(", "));
                status.set(article.status);
                featured.set(article.featured);
                content.set(article.content);
                loaded.set(true);
            }
            ArticleLookup::Pending => {}
            ArticleLookup::Missing(message) => load_error.set(Some(message)),
        }
    });

    Effect::new(move |_| {
        if saved.get() {
            navigate("/advocacy", Default::default());
        }
    });

    let text_input = move |signal: RwSignal<String>| {
        move |ev: web_sys::Event| {
            if let Some(input) =
                ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                signal.set(input.value());
            }
        }
    };

    let on_content_input = move |ev: web_sys::Event| {
        if let Some(area) =
            ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        {
            content.set(area.value());
        }
    };

    let on_status_change = move |ev: web_sys::Event| {
        if let Some(select) =
            ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        {
            let value = if select.value() == "published" {
                ArticleStatus::Published
            } else {
                ArticleStatus::Draft
            };
            status.set(value);
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        image_file.set(file);
    };

    let do_save = move || {
        if title.get().trim().is_empty() {
            error.set(Some("Title is required".to_string()));
            return;
        }
        if content.get().trim().is_empty() {
            error.set(Some("Content is required".to_string()));
            return;
        }

        let Ok(form) = FormData::new() else {
            error.set(Some("Could not build the form".to_string()));
            return;
        };
        let _ = form.append_with_str("title", title.get().trim());
        let _ = form.append_with_str("excerpt", excerpt.get().trim());
        let _ = form.append_with_str("category", category.get().trim());
        let _ = form.append_with_str("partner", partner.get().trim());
        let _ = form.append_with_str("status", status.get().as_str());
        let _ = form.append_with_str("featured", if featured.get() { "true" } else { "false" });
        let _ = form.append_with_str("content", &content.get());
        for tag in tags.get().split(',') {
            let tag = tag.trim();
            if !tag.is_empty() {
                let _ = form.append_with_str("tags", tag);
            }
        }
        if let Some(file) = image_file.get() {
            let _ = form.append_with_blob_and_filename("featuredImage", &file, &file.name());
        }

        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match article_id.get_untracked() {
                Some(id) => articles.update(&id, form).await,
                None => articles.create(form).await,
            };
            match result {
                Ok(_) => saved.set(true),
                Err(message) => {
                    error.set(Some(message));
                    saving.set(false);
                }
            }
        });
    };

    let submit_label =
        if is_edit.get_untracked() { "Save changes" } else { "Publish article" }.to_string();

    view! {
        <div class="page article-editor">
            <Topbar title="Advocacy article" />
            <a href="/advocacy" class="back-link">"← Back to articles"</a>

            <Show when=move || error.get().is_some()>
                <div class="alert alert--error">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=move || load_error.get().is_some()>
                <div class="alert alert--error">
                    <span>{move || load_error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || loaded.get()
                fallback=move || {
                    view! {
                        <Show when=move || load_error.get().is_none()>
                            <p class="loading">"Loading article..."</p>
                        </Show>
                    }
                }
            >
                <div class="card form article-form">
                    <div class="form-group">
                        <label for="article-title">"Title"</label>
                        <input
                            id="article-title"
                            type="text"
                            class="form-input"
                            prop:value=move || title.get()
                            on:input=text_input(title)
                        />
                    </div>

                    <div class="form-group">
                        <label for="article-excerpt">"Excerpt"</label>
                        <input
                            id="article-excerpt"
                            type="text"
                            class="form-input"
                            prop:value=move || excerpt.get()
                            on:input=text_input(excerpt)
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="article-category">"Category"</label>
                            <input
                                id="article-category"
                                type="text"
                                class="form-input"
                                prop:value=move || category.get()
                                on:input=text_input(category)
                            />
                        </div>
                        <div class="form-group">
                            <label for="article-partner">"Partner"</label>
                            <input
                                id="article-partner"
                                type="text"
                                class="form-input"
                                prop:value=move || partner.get()
                                on:input=text_input(partner)
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="article-status">"Status"</label>
                            <select id="article-status" class="form-input" on:change=on_status_change>
                                <option value="draft" selected=move || status.get() == ArticleStatus::Draft>
                                    "Draft"
                                </option>
                                <option value="published" selected=move || status.get() == ArticleStatus::Published>
                                    "Published"
                                </option>
                            </select>
                        </div>
                        <div class="form-group form-group--checkbox">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || featured.get()
                                    on:change=move |_| featured.update(|v| *v = !*v)
                                />
                                "Featured"
                            </label>
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="article-tags">"Tags (comma separated)"</label>
                        <input
                            id="article-tags"
                            type="text"
                            class="form-input"
                            prop:value=move || tags.get()
                            on:input=text_input(tags)
                        />
                    </div>

                    <div class="form-group">
                        <label for="article-image">"Featured image"</label>
                        <input
                            id="article-image"
                            type="file"
                            accept="image/*"
                            class="form-input"
                            on:change=on_file_change
                        />
                    </div>

                    <div class="editor-split">
                        <div class="form-group">
                            <label for="article-content">"Content (HTML)"</label>
                            <textarea
                                id="article-content"
                                class="form-input editor-textarea"
                                rows="16"
                                prop:value=move || content.get()
                                on:input=on_content_input
                            ></textarea>
                        </div>
                        <div class="editor-preview">
                            <span class="editor-preview__label">"Preview"</span>
                            <div class="editor-preview__body" inner_html=move || content.get()></div>
                        </div>
                    </div>

                    <div class="form-actions">
                        <Button
                            text=submit_label.clone()
                            loading=saving.get()
                            on_click=do_save.clone()
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
