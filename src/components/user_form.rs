//! User Form Component
//!
//! Name/email form bound to the store draft. Submits as create or update
//! depending on whether a user is being edited.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_submit, use_app_store, AppStateStoreFields};

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

#[component]
pub fn UserForm() -> impl IntoView {
    let store = use_app_store();

    let is_editing = move || store.users().read().draft().is_editing();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !store.users().read().draft().is_complete() {
            return;
        }
        if let Some(submitted) = store_submit(&store) {
            tracing::debug!("Submitted: {:?}", submitted);
        }
    };

    view! {
        <form class="user-form" on:submit=on_submit>
            <input
                name="name"
                type="text"
                placeholder="Enter Name"
                required=true
                prop:value=move || store.users().read().draft().name.clone()
                on:input=move |ev| store.users().write().set_draft_name(input_value(&ev))
            />
            <input
                name="email"
                type="text"
                placeholder="Enter Email"
                required=true
                prop:value=move || store.users().read().draft().email.clone()
                on:input=move |ev| store.users().write().set_draft_email(input_value(&ev))
            />
            <div class="user-form-actions">
                <button
                    type="submit"
                    class=move || if is_editing() { "submit-btn update" } else { "submit-btn create" }
                >
                    {move || if is_editing() { "Update User" } else { "Add User" }}
                </button>
                <Show when=is_editing>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| store.users().write().cancel_edit()
                    >
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
