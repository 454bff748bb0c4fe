//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod user_card;
mod user_form;
mod user_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use user_card::UserCard;
pub use user_form::UserForm;
pub use user_list::UserList;
