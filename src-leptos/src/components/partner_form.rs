//! Shared partner create/edit form.

use amwell_types::{Partner, PartnerType};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::FormData;

use super::Button;

/// Partner form used by both the create and edit pages. Builds a
/// multipart body so an optional image file can ride along; the page
/// owns submission and error display policy.
#[component]
pub fn PartnerForm(
    #[prop(optional)] initial: Option<Partner>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<FormData>,
) -> impl IntoView {
    let initial = initial.unwrap_or_default();

    let name = RwSignal::new(initial.name.clone());
    let partner_type = RwSignal::new(initial.partner_type);
    let email = RwSignal::new(initial.email.clone().unwrap_or_default());
    let phone = RwSignal::new(initial.phone.clone().unwrap_or_default());
    let website = RwSignal::new(initial.website.clone().unwrap_or_default());
    let business_address = RwSignal::new(initial.business_address.clone().unwrap_or_default());
    let profession = RwSignal::new(initial.profession.clone().unwrap_or_default());
    let description = RwSignal::new(initial.description.clone().unwrap_or_default());
    let social_links = RwSignal::new(initial.social_links.join(", "));
    let is_active = RwSignal::new(initial.is_active);
    let image_file = RwSignal::new_local(None::<web_sys::File>);
    let validation = RwSignal::new(Option::<String>::None);

    let text_input = move |signal: RwSignal<String>| {
        move |ev: web_sys::Event| {
            if let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                signal.set(input.value());
            }
        }
    };

    let on_type_change = move |ev: web_sys::Event| {
        if let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        {
            let value = if select.value() == "business" {
                PartnerType::Business
            } else {
                PartnerType::Individual
            };
            partner_type.set(value);
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

    let on_description_change = move |ev: web_sys::Event| {
        if let Some(area) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        {
            description.set(area.value());
        }
    };

    let submit = move || {
        if name.get().trim().is_empty() {
            validation.set(Some("Name is required".to_string()));
            return;
        }
        validation.set(None);

        let Ok(form) = FormData::new() else {
            validation.set(Some("Could not build the form".to_string()));
            return;
        };
        let _ = form.append_with_str("name", name.get().trim());
        let _ = form.append_with_str("partnerType", partner_type.get().as_str());
        let _ = form.append_with_str("isActive", if is_active.get() { "true" } else { "false" });
        let _ = form.append_with_str("email", email.get().trim());
        let _ = form.append_with_str("phone", phone.get().trim());
        let _ = form.append_with_str("website", website.get().trim());
        let _ = form.append_with_str("businessAddress", business_address.get().trim());
        let _ = form.append_with_str("profession", profession.get().trim());
        let _ = form.append_with_str("description", description.get().trim());
        for link in social_links.get().split(',') {
            let link = link.trim();
            if !link.is_empty() {
                let _ = form.append_with_str("socialLinks", link);
            }
        }
        if let Some(file) = image_file.get() {
            let _ = form.append_with_blob_and_filename("partnerImage", &file, &file.name());
        }

        on_submit.run(form);
    };

    view! {
        <div class="form partner-form">
            <Show when=move || validation.get().is_some() || error.get().is_some()>
                <div class="alert alert--error">
                    <span>{move || validation.get().or_else(|| error.get()).unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="form-group">
                <label for="partner-name">"Name"</label>
                <input
                    id="partner-name"
                    type="text"
                    class="form-input"
                    prop:value=move || name.get()
                    on:input=text_input(name)
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="partner-type">"Type"</label>
                    <select id="partner-type" class="form-input" on:change=on_type_change>
                        <option value="individual" selected=move || partner_type.get() == PartnerType::Individual>
                            "Individual"
                        </option>
                        <option value="business" selected=move || partner_type.get() == PartnerType::Business>
                            "Business"
                        </option>
                    </select>
                </div>
                <div class="form-group form-group--checkbox">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || is_active.get()
                            on:change=move |_| is_active.update(|v| *v = !*v)
                        />
                        "Active"
                    </label>
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="partner-email">"Email"</label>
                    <input
                        id="partner-email"
                        type="email"
                        class="form-input"
                        prop:value=move || email.get()
                        on:input=text_input(email)
                    />
                </div>
                <div class="form-group">
                    <label for="partner-phone">"Phone"</label>
                    <input
                        id="partner-phone"
                        type="tel"
                        class="form-input"
                        prop:value=move || phone.get()
                        on:input=text_input(phone)
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="partner-website">"Website"</label>
                    <input
                        id="partner-website"
                        type="url"
                        class="form-input"
                        prop:value=move || website.get()
                        on:input=text_input(website)
                    />
                </div>
                <div class="form-group">
                    <label for="partner-profession">"Profession"</label>
                    <input
                        id="partner-profession"
                        type="text"
                        class="form-input"
                        prop:value=move || profession.get()
                        on:input=text_input(profession)
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="partner-address">"Business address"</label>
                <input
                    id="partner-address"
                    type="text"
                    class="form-input"
                    prop:value=move || business_address.get()
                    on:input=text_input(business_address)
                />
            </div>

            <div class="form-group">
                <label for="partner-description">"Description"</label>
                <textarea
                    id="partner-description"
                    class="form-input"
                    rows="4"
                    prop:value=move || description.get()
                    on:input=on_description_change
                ></textarea>
            </div>

            <div class="form-group">
                <label for="partner-social">"Social links (comma separated)"</label>
                <input
                    id="partner-social"
                    type="text"
                    class="form-input"
                    prop:value=move || social_links.get()
                    on:input=text_input(social_links)
                />
            </div>

            <div class="form-group">
                <label for="partner-image">"Partner image"</label>
                <input
                    id="partner-image"
                    type="file"
                    accept="image/*"
                    class="form-input"
                    on:change=on_file_change
                />
            </div>

            <div class="form-actions">
                <Button
                    text=submit_label
                    loading=saving.get()
                    on_click=submit
                />
            </div>
        </div>
    }
}
