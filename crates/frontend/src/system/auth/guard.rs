use contracts::system::auth::PermissionAction;
use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires a module permission for the current admin.
/// Shows fallback if the permission is missing.
#[component]
pub fn RequirePermission(
    module: &'static str,
    #[prop(optional)] action: Option<PermissionAction>,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let action = action.unwrap_or(PermissionAction::View);

    view! {
        <Show
            when=move || {
                let state = auth_state.get();
                state.token.is_some()
                    && state.admin.as_ref().map(|a| a.can(module, action)).unwrap_or(false)
            }
            fallback=|| view! { <div class="guard-message">"Access denied."</div> }
        >
            {children()}
        </Show>
    }
}
