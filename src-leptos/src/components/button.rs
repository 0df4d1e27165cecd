//! Submit button with a saving state.

use leptos::prelude::*;

/// Primary action button used by the login, register and resource
/// forms. While `loading` is set it disables itself and swaps its label
/// for a saving indicator.
#[component]
pub fn Button(
    #[prop(into)] text: String,
    /// Whether a submit is in flight
    #[prop(optional)]
    loading: bool,
    /// Additional CSS class
    #[prop(optional, into)]
    class: String,
    on_click: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let loading_class = if loading { "btn--loading" } else { "" };
    let class = format!("btn btn--primary {} {}", loading_class, class);

    view! {
        <button class=class disabled=loading on:click=move |_| on_click()>
            {move || if loading { "Saving...".to_string() } else { text.clone() }}
        </button>
    }
}
