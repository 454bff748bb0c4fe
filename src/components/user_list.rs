//! User List Component
//!
//! Renders every stored user in insertion order.

use leptos::prelude::*;

use crate::components::UserCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn UserList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="user-list">
            // Keyed on the whole record so edits re-render the card
            <For
                each=move || store.users().read().users().to_vec()
                key=|user| (user.id, user.name.clone(), user.email.clone())
                children=move |user| view! { <UserCard user=user /> }
            />
            <Show when=move || store.users().read().is_empty() && !store.loading().get()>
                <p class="empty-list">"No users yet."</p>
            </Show>
        </div>
    }
}
