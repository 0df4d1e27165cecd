//! Destructive-action confirmation dialog.

use leptos::prelude::*;

/// Modal confirmation used before deletes. The overlay, the close
/// button and the cancel button all dismiss; only the danger-styled
/// confirm button runs `on_confirm`.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into, default = "Delete".to_string())] confirm_text: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
                <div class="modal" on:click=|e| e.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">{title.clone()}</h3>
                        <button class="modal-close" on:click=move |_| on_cancel.run(())>
                            "×"
                        </button>
                    </div>

                    <div class="modal-body">
                        <p>{message.clone()}</p>
                    </div>

                    <div class="modal-footer">
                        <button class="btn btn--secondary" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                            {confirm_text.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
