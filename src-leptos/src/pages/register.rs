//! Admin registration page

use crate::api::{commands, session};
use crate::components::Button;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

#[component]
pub fn Register() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(false);
    let navigate = use_navigate();

    let nav_for_check = navigate.clone();
    Effect::new(move |_| {
        if session::is_authenticated() {
            nav_for_check("/", Default::default());
        }
    });

    let nav_for_submit = navigate.clone();
    let do_submit = move || {
        if name.get().trim().is_empty()
            || email.get().trim().is_empty()
            || password.get().is_empty()
        {
            error.set(Some("Please fill in all fields".to_string()));
            return;
        }
        if password.get() != confirm.get() {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }

        loading.set(true);
        error.set(None);

        let nav = nav_for_submit.clone();
        leptos::task::spawn_local(async move {
            let result = commands::admin_register(
                &name.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
            )
            .await;
            match result {
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

    let text_input = move |signal: RwSignal<String>| {
        move |ev: web_sys::Event| {
            if let Some(input) =
                ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                signal.set(input.value());
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-container">
                <div class="login-header">
                    <h1>"Welcome to Plan Am Well Admin"</h1>
                    <p class="login-subtitle">"Create an administrator account"</p>
                </div>

                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <div class="login-form">
                    <div class="form-group">
                        <label for="register-name">"Name"</label>
                        <input
                            id="register-name"
                            type="text"
                            class="form-input"
                            prop:value=move || name.get()
                            on:input=text_input(name)
                            disabled=move || loading.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-email">"Email"</label>
                        <input
                            id="register-email"
                            type="email"
                            class="form-input"
                            prop:value=move || email.get()
                            on:input=text_input(email)
                            disabled=move || loading.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-password">"Password"</label>
                        <input
                            id="register-password"
                            type="password"
                            class="form-input"
                            prop:value=move || password.get()
                            on:input=text_input(password)
                            disabled=move || loading.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-confirm">"Confirm password"</label>
                        <input
                            id="register-confirm"
                            type="password"
                            class="form-input"
                            prop:value=move || confirm.get()
                            on:input=text_input(confirm)
                            disabled=move || loading.get()
                        />
                    </div>

                    <Button
                        text="Create account".to_string()
                        loading=loading.get()
                        on_click=do_submit.clone()
                        class="btn--full-width"
                    />
                </div>

                <p class="login-hint">
                    "Already registered? " <a href="/auth/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
