//! Admin login page

use crate::api::{commands, session};
use crate::components::Button;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

#[component]
pub fn Login() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);
    let navigate = use_navigate();

    // Already signed in: skip the form
    let nav_for_check = navigate.clone();
    Effect::new(move |_| {
        if session::is_authenticated() {
            nav_for_check("/", Default::default());
        }
    });

    let nav_for_submit = navigate.clone();
    let do_submit = move || {
        if email.get().trim().is_empty() || password.get().is_empty() {
            error.set(Some("Please enter both email and password".to_string()));
            return;
        }

        loading.set(true);
        error.set(None);

        let nav = nav_for_submit.clone();
        leptos::task::spawn_local(async move {
            match commands::admin_login(&email.get_untracked(), &password.get_untracked()).await {
                Ok(tokens) => {
                    session::store_tokens(&tokens);
                    nav("/", Default::default());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    };

    let on_email_input = move |ev: web_sys::Event| {
        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            email.set(input.value());
        }
    };
    let on_password_input = move |ev: web_sys::Event| {
        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            password.set(input.value());
        }
    };

    let submit_for_keydown = do_submit.clone();
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit_for_keydown();
        }
    };

    view! {
        <div class="login-page">
            <div class="login-container">
                <div class="login-header">
                    <img src="/icon.png" alt="Plan Am Well" class="login-logo" />
                    <h1>"Plan Am Well Admin"</h1>
                    <p class="login-subtitle">"Sign in to manage the platform"</p>
                </div>

                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="login-form">
                    <div class="form-group">
                        <label for="login-email">"Email"</label>
                        <input
                            id="login-email"
                            type="email"
                            placeholder="admin@planamwell.com"
                            class="form-input"
                            prop:value=move || email.get()
                            on:input=on_email_input
                            disabled=move || loading.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            type="password"
                            class="form-input"
                            prop:value=move || password.get()
                            on:input=on_password_input
                            on:keydown=on_keydown
                            disabled=move || loading.get()
                        />
                    </div>

                    <Button
                        text="Sign in".to_string()
                        loading=loading.get()
                        on_click=do_submit.clone()
                        class="btn--full-width"
                    />
                </div>

                <p class="login-hint">
                    "No account yet? " <a href="/auth/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
