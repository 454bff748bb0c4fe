//! User Card Component

use leptos::prelude::*;
use user_store::{EditState, UserRecord};

use crate::components::DeleteConfirmButton;
use crate::store::{store_begin_edit, store_remove_user, use_app_store, AppStateStoreFields};

/// One user with Edit and Delete actions
#[component]
pub fn UserCard(user: UserRecord) -> impl IntoView {
    let store = use_app_store();
    let id = user.id;

    let is_being_edited = move || store.users().read().edit_state() == EditState::Editing(id);
    let card_class = move || if is_being_edited() { "user-card editing" } else { "user-card" };

    let on_edit = {
        let user = user.clone();
        move |_: web_sys::MouseEvent| store_begin_edit(&store, &user)
    };

    view! {
        <div class=card_class>
            <h3 class="user-name">{user.name.clone()}</h3>
            <p class="user-email">{user.email.clone()}</p>
            <div class="user-card-actions">
                <button class="edit-btn" on:click=on_edit>"Edit"</button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=move |_| store_remove_user(&store, id)
                />
            </div>
        </div>
    }
}
