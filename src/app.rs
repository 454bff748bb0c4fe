//! User Manager App
//!
//! Single-page form-and-list view over the user store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{UserForm, UserList};
use crate::config::app_config;
use crate::store::{store_initialize, store_refresh, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = app_config();
    let store = Store::new(AppState::new(&config));

    // Provide store to all children
    provide_context(store);

    // Seed once on mount
    Effect::new(move |_| store_initialize(store));

    view! {
        <main class="app-layout">
            <h1>"User Management System"</h1>

            <UserForm />

            <div class="list-toolbar">
                <button
                    class="refresh-btn"
                    disabled=move || store.loading().get()
                    on:click=move |_| store_refresh(store)
                >
                    {move || if store.loading().get() { "Loading..." } else { "Reload from server" }}
                </button>
            </div>

            <UserList />

            <p class="user-count">{move || format!("{} users", store.users().read().len())}</p>
        </main>
    }
}
