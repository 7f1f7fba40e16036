//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, application title, and the signed-in admin
//! with a logout action.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, set_auth_state) = use_auth();

    let admin_name = move || {
        auth_state
            .get()
            .admin
            .map(|a| a.name)
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_sidebar()
                    title="Toggle navigation"
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Packarma Admin"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__user">
                    {icon("user")}
                    {admin_name}
                </span>
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| do_logout(set_auth_state)
                    title="Sign out"
                >
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
